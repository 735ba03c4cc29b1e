//! SortService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use currency_rates::RateCache;
    use itineraries_types::domain::{CurrencyCode, Itinerary, Price, RateTable};
    use itineraries_types::error::{AppError, ProviderError, SortError};
    use itineraries_types::ports::RateProvider;

    use crate::registry::SortRegistry;
    use crate::service::SortService;

    /// Scripted rate source for testing the service layer.
    /// Serves USD=1, EUR=0.8, GBP=0.5 unless switched into failure mode.
    pub struct StaticRates {
        calls: AtomicUsize,
        fail: AtomicBool,
    }

    impl StaticRates {
        pub fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: AtomicBool::new(false),
            }
        }

        pub fn failing() -> Self {
            let rates = Self::new();
            rates.fail.store(true, Ordering::SeqCst);
            rates
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RateProvider for StaticRates {
        fn name(&self) -> &'static str {
            "StaticRates"
        }

        async fn fetch_rates(&self, base: &CurrencyCode) -> Result<RateTable, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(ProviderError::new(self.name(), "simulated timeout"));
            }
            let mut rates = RateTable::new();
            rates.insert(base.clone(), 1.0);
            rates.insert(code("EUR"), 0.8);
            rates.insert(code("GBP"), 0.5);
            Ok(rates)
        }
    }

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s).unwrap()
    }

    fn itinerary(id: &str, duration_minutes: u32, amount: i64, currency: &str) -> Itinerary {
        Itinerary {
            id: id.to_string(),
            duration_minutes,
            price: Price {
                amount,
                currency: code(currency),
            },
        }
    }

    fn service_with(provider: StaticRates) -> SortService<StaticRates> {
        SortService::new(
            SortRegistry::with_builtins().unwrap(),
            RateCache::new(provider, Duration::from_secs(86_400)),
            code("USD"),
        )
    }

    fn service() -> SortService<StaticRates> {
        service_with(StaticRates::new())
    }

    fn ids(itineraries: &[Itinerary]) -> Vec<&str> {
        itineraries.iter().map(|i| i.id.as_str()).collect()
    }

    /// All permutations of `items`, Heap's algorithm.
    fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
        fn generate<T: Clone>(k: usize, items: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
            if k <= 1 {
                out.push(items.clone());
                return;
            }
            for i in 0..k {
                generate(k - 1, items, out);
                if k % 2 == 0 {
                    items.swap(i, k - 1);
                } else {
                    items.swap(0, k - 1);
                }
            }
        }
        let mut items = items.to_vec();
        let mut out = Vec::new();
        generate(items.len(), &mut items, &mut out);
        out
    }

    /// Sorts every permutation of `sorted` and expects `sorted` back.
    /// Fixtures use rates (1.0, 0.8, 0.5) and amounts with exact binary
    /// representations, so key equality needs no epsilon; ties are avoided
    /// by construction.
    async fn assert_sorts_to(algorithm: &str, sorted: Vec<Itinerary>) {
        let service = service();
        for case in permutations(&sorted) {
            let result = service.sort(algorithm, case.clone()).await.unwrap();
            assert_eq!(ids(&result), ids(&sorted), "input order {:?}", ids(&case));
        }
    }

    #[tokio::test]
    async fn test_fastest_orders_by_duration() {
        let service = service();
        let result = service
            .sort(
                "fastest",
                vec![itinerary("A", 10, 100, "USD"), itinerary("B", 5, 100, "USD")],
            )
            .await
            .unwrap();

        assert_eq!(ids(&result), vec!["B", "A"]);
    }

    #[tokio::test]
    async fn test_cheapest_converts_into_base_currency() {
        // A: 100 / 1.0 = 100, B: 100 / 0.8 = 125 -> A first
        let service = service();
        let result = service
            .sort(
                "cheapest",
                vec![
                    itinerary("A", 1, 100, "USD"),
                    itinerary("B", 1, 100, "EUR"),
                ],
            )
            .await
            .unwrap();

        assert_eq!(ids(&result), vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_cheapest_full_ordering() {
        // Keys: 1, 1.25, 2, 3
        assert_sorts_to(
            "cheapest",
            vec![
                itinerary("1", 1, 1, "USD"),
                itinerary("4", 2, 1, "EUR"),
                itinerary("2", 2, 2, "USD"),
                itinerary("3", 1, 3, "USD"),
            ],
        )
        .await;
    }

    #[tokio::test]
    async fn test_best_weighs_price_by_duration() {
        // Keys: 1*1=1, (1/0.8)*2=2.5, 3*1=3, 2*2=4
        assert_sorts_to(
            "best",
            vec![
                itinerary("1", 1, 1, "USD"),
                itinerary("4", 2, 1, "EUR"),
                itinerary("3", 1, 3, "USD"),
                itinerary("2", 2, 2, "USD"),
            ],
        )
        .await;
    }

    #[tokio::test]
    async fn test_fastest_full_ordering() {
        assert_sorts_to(
            "fastest",
            vec![
                itinerary("1", 5, 1, "USD"),
                itinerary("2", 10, 1, "USD"),
                itinerary("3", 20, 1, "USD"),
            ],
        )
        .await;
    }

    #[tokio::test]
    async fn test_output_is_a_permutation_of_input() {
        let service = service();
        let input = vec![
            itinerary("x", 7, 300, "GBP"),
            itinerary("y", 7, 120, "EUR"),
            itinerary("z", 3, 90, "USD"),
        ];

        for algorithm in ["fastest", "cheapest", "best"] {
            let result = service.sort(algorithm, input.clone()).await.unwrap();
            assert_eq!(result.len(), input.len());

            let mut expected = ids(&input);
            let mut actual = ids(&result);
            expected.sort_unstable();
            actual.sort_unstable();
            assert_eq!(actual, expected, "algorithm {algorithm}");
        }
    }

    #[tokio::test]
    async fn test_sorting_sorted_input_is_idempotent() {
        let service = service();
        let input = vec![
            itinerary("1", 1, 50, "USD"),
            itinerary("2", 2, 60, "USD"),
            itinerary("3", 3, 70, "USD"),
        ];

        let once = service.sort("best", input).await.unwrap();
        let twice = service.sort("best", once.clone()).await.unwrap();
        assert_eq!(once, twice);
    }

    #[tokio::test]
    async fn test_equal_keys_keep_input_order() {
        let service = service();
        let input = vec![
            itinerary("first", 5, 10, "USD"),
            itinerary("second", 5, 20, "USD"),
            itinerary("third", 5, 30, "USD"),
        ];

        // All three share duration 5; the stable sort must not reorder them
        let result = service.sort("fastest", input.clone()).await.unwrap();
        assert_eq!(ids(&result), ids(&input));
    }

    #[tokio::test]
    async fn test_empty_input_returns_empty_output() {
        let service = service();
        for algorithm in ["fastest", "cheapest", "best"] {
            let result = service.sort(algorithm, vec![]).await.unwrap();
            assert!(result.is_empty());
        }
    }

    #[tokio::test]
    async fn test_unknown_algorithm_is_rejected() {
        let service = service();
        let result = service.sort("not_a_real_algo", vec![]).await;

        assert!(matches!(
            result,
            Err(AppError::Sort(SortError::UnknownAlgorithm(name))) if name == "not_a_real_algo"
        ));
    }

    #[tokio::test]
    async fn test_unknown_currency_fails_the_whole_batch() {
        let service = service();
        let result = service
            .sort(
                "cheapest",
                vec![
                    itinerary("ok", 1, 100, "USD"),
                    itinerary("bad", 1, 100, "JPY"),
                ],
            )
            .await;

        assert!(matches!(
            result,
            Err(AppError::Sort(SortError::UnknownCurrency(c))) if c.as_str() == "JPY"
        ));
    }

    #[tokio::test]
    async fn test_provider_failure_only_breaks_rate_dependent_sorts() {
        let service = service_with(StaticRates::failing());
        let input = vec![itinerary("A", 10, 100, "USD"), itinerary("B", 5, 100, "USD")];

        let cheapest = service.sort("cheapest", input.clone()).await;
        assert!(matches!(cheapest, Err(AppError::RatesUnavailable(_))));

        // No rate dependency, so the same input still sorts
        let fastest = service.sort("fastest", input).await.unwrap();
        assert_eq!(ids(&fastest), vec!["B", "A"]);
    }

    #[tokio::test]
    async fn test_rates_are_fetched_even_for_empty_input() {
        let service = service_with(StaticRates::failing());

        // The rate dependency is declared by the algorithm, not by the
        // payload, so an empty batch still surfaces the outage
        let result = service.sort("cheapest", vec![]).await;
        assert!(matches!(result, Err(AppError::RatesUnavailable(_))));
    }

    #[tokio::test]
    async fn test_snapshot_is_reused_across_requests() {
        let service = service();
        let input = vec![itinerary("A", 1, 100, "EUR")];

        service.sort("cheapest", input.clone()).await.unwrap();
        service.sort("best", input).await.unwrap();

        assert_eq!(service.rates().provider().calls(), 1);
    }

    #[tokio::test]
    async fn test_algorithms_lists_registered_names() {
        let service = service();
        assert_eq!(service.algorithms(), vec!["fastest", "cheapest", "best"]);
    }
}

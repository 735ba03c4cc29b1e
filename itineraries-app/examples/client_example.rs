//! Client example demonstrating sort flows against a running server.
//!
//! Run with: cargo run -p itineraries-app --example client_example

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;

use currency_rates::RateCache;
use itineraries_client::SortClient;
use itineraries_hex::{SortRegistry, SortService, inbound::HttpServer};
use itineraries_types::domain::{CurrencyCode, Itinerary, Price, RateTable};
use itineraries_types::error::ProviderError;
use itineraries_types::ports::RateProvider;

/// In-process rate source so the example needs no network access.
struct DemoRates;

#[async_trait::async_trait]
impl RateProvider for DemoRates {
    fn name(&self) -> &'static str {
        "DemoRates"
    }

    async fn fetch_rates(&self, base: &CurrencyCode) -> Result<RateTable, ProviderError> {
        let mut rates = RateTable::new();
        rates.insert(base.clone(), 1.0);
        rates.insert("EUR".parse().unwrap(), 0.8);
        rates.insert("GBP".parse().unwrap(), 0.5);
        Ok(rates)
    }
}

fn itinerary(id: &str, duration_minutes: u32, amount: i64, currency: &str) -> Itinerary {
    Itinerary {
        id: id.to_string(),
        duration_minutes,
        price: Price {
            amount,
            currency: currency.parse().unwrap(),
        },
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Find an available port
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    let port = addr.port();
    drop(listener);

    println!("🚀 Starting server on port {port}...");

    // Wire the service against the in-process rate source
    let service = SortService::new(
        SortRegistry::with_builtins()?,
        RateCache::new(DemoRates, Duration::from_secs(86_400)),
        "USD".parse().unwrap(),
    );
    let server = HttpServer::new(service);
    let router = server.router();

    let server_addr = format!("127.0.0.1:{port}");
    tokio::spawn(async move {
        axum::serve(
            TcpListener::bind(&server_addr).await.unwrap(),
            router.into_make_service(),
        )
        .await
        .unwrap();
    });

    // Wait for server to start
    tokio::time::sleep(std::time::Duration::from_millis(500)).await;

    // Create client
    let base_url = format!("http://127.0.0.1:{port}");
    let client = SortClient::new(&base_url);

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: sort the same batch three ways
    // ─────────────────────────────────────────────────────────────────────────

    // Health check
    let health = client.health().await?;
    println!("✅ Server health: {health}");

    let algorithms = client.algorithms().await?;
    println!("✅ Available algorithms: {algorithms:?}");

    let itineraries = vec![
        itinerary("city_break", 120, 250, "EUR"),
        itinerary("overnight_express", 540, 90, "USD"),
        itinerary("grand_tour", 300, 310, "GBP"),
    ];

    for algorithm in &algorithms {
        let sorted = client.sort(algorithm, itineraries.clone()).await?;
        let order: Vec<&str> = sorted.iter().map(|i| i.id.as_str()).collect();
        println!("✅ {algorithm}: {order:?}");
    }

    // Unknown algorithms are rejected with a client error
    let err = client.sort("teleport", itineraries).await.unwrap_err();
    println!("✅ Expected rejection: {err}");

    Ok(())
}

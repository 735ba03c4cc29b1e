//! # Itineraries Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the rate provider and cache
//! - Build the sort registry and service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use currency_rates::{ExchangeRateApi, RateCache, RatesConfig};
use itineraries_hex::{SortRegistry, SortService, inbound::HttpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber with JSON output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,itineraries_app=debug,itineraries_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting itineraries server on port {}", config.port);
    tracing::info!("Using rate provider: {}", config.exchange_rate_api_url);

    // Build the rate subsystem
    let rates_config = RatesConfig::new(&config.exchange_rate_api_url)
        .with_cache_ttl(config.currency_cache_ttl)
        .with_request_timeout(config.exchange_rate_api_timeout);
    let provider = ExchangeRateApi::new(&rates_config)?;
    let cache = RateCache::new(provider, rates_config.cache_ttl);

    // Register the sort algorithms; a name conflict here is a programming
    // error and aborts startup
    let registry = SortRegistry::with_builtins()?;

    // Create the sort service
    let service = SortService::new(registry, cache, config.base_currency);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}

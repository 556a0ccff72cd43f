use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use trip_server::cache::{BlockingPlaceResolver, CachedGeocodeClient};
use trip_server::config::AppConfig;
use trip_server::geocode::{GeocodeClient, MockPlaceResolver};
use trip_server::itinerary::PlaceResolver;

/// When set, places are served from this JSON file instead of the API.
const MOCK_FILE_VAR: &str = "GEOCODE_MOCK_FILE";

/// Resolve each command-line keyword and print the place as JSON.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let keywords: Vec<String> = std::env::args().skip(1).collect();
    if keywords.is_empty() {
        eprintln!("usage: trip-server <place keyword>...");
        std::process::exit(2);
    }

    let resolver: Box<dyn PlaceResolver> = match std::env::var(MOCK_FILE_VAR) {
        Ok(path) => match MockPlaceResolver::from_json_file(&path) {
            Ok(mock) => {
                info!(%path, "using mock places");
                Box::new(mock)
            }
            Err(e) => {
                error!(error = %e, "failed to load mock places");
                std::process::exit(1);
            }
        },
        Err(_) => {
            let config = AppConfig::from_env();
            let client = match GeocodeClient::new(config.geocode) {
                Ok(client) => client,
                Err(e) => {
                    error!(error = %e, "failed to create geocoding client");
                    std::process::exit(1);
                }
            };
            let cached = Arc::new(CachedGeocodeClient::new(client, &config.cache));
            Box::new(BlockingPlaceResolver::current(cached))
        }
    };

    let mut failures = 0;
    for keyword in &keywords {
        match resolver.resolve(keyword) {
            Ok(place) => match serde_json::to_string_pretty(&place) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    error!(%keyword, error = %e, "failed to encode place");
                    failures += 1;
                }
            },
            Err(e) => {
                error!(%keyword, error = %e, "lookup failed");
                failures += 1;
            }
        }
    }

    info!(total = keywords.len(), failures, "done");
    if failures > 0 {
        std::process::exit(1);
    }
}

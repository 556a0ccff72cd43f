//! Process configuration from environment variables.

use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::cache::PlaceCacheConfig;
use crate::geocode::GeocodeConfig;

pub const API_KEY_VAR: &str = "GEOCODE_API_KEY";
pub const BASE_URL_VAR: &str = "GEOCODE_BASE_URL";
pub const TIMEOUT_VAR: &str = "GEOCODE_TIMEOUT_SECS";
pub const CACHE_TTL_VAR: &str = "PLACE_CACHE_TTL_SECS";
pub const CACHE_CAPACITY_VAR: &str = "PLACE_CACHE_CAPACITY";

/// Everything the binary needs to talk to the geocoding API.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub geocode: GeocodeConfig,
    pub cache: PlaceCacheConfig,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Unset variables fall back to defaults. A missing API key is allowed
    /// but every live lookup will then be rejected as unauthorized.
    /// Unparseable numbers are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup(API_KEY_VAR).unwrap_or_else(|| {
            warn!("{API_KEY_VAR} not set, geocoding calls will fail");
            String::new()
        });

        let mut geocode = GeocodeConfig::new(api_key);
        if let Some(url) = lookup(BASE_URL_VAR) {
            geocode = geocode.with_base_url(url);
        }
        if let Some(secs) = parse_var(&lookup, TIMEOUT_VAR) {
            geocode = geocode.with_timeout(secs);
        }

        let mut cache = PlaceCacheConfig::default();
        if let Some(secs) = parse_var(&lookup, CACHE_TTL_VAR) {
            cache.ttl = Duration::from_secs(secs);
        }
        if let Some(capacity) = parse_var(&lookup, CACHE_CAPACITY_VAR) {
            cache.max_capacity = capacity;
        }

        Self { geocode, cache }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    let raw = lookup(name)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(var = name, value = %raw, "ignoring unparseable setting");
            None
        }
    }
}

//! Caching layer for place lookups.
//!
//! Itineraries often name the same place several times (a move's
//! destination is usually the next accommodation), and keyword results
//! change rarely. Successful lookups are cached by trimmed keyword;
//! misses and failures are not.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tokio::runtime::{Handle, RuntimeFlavor};
use tracing::{debug, warn};

use crate::domain::PlaceInfo;
use crate::geocode::{GeocodeClient, GeocodeError};
use crate::itinerary::{PlaceResolver, ResolveError};

/// Configuration for the place cache.
#[derive(Debug, Clone)]
pub struct PlaceCacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for PlaceCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Cache of resolved places, keyed by keyword.
pub struct PlaceCache {
    places: MokaCache<String, Arc<PlaceInfo>>,
}

impl PlaceCache {
    pub fn new(config: &PlaceCacheConfig) -> Self {
        let places = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { places }
    }

    pub async fn get(&self, keyword: &str) -> Option<Arc<PlaceInfo>> {
        self.places.get(cache_key(keyword)).await
    }

    pub async fn insert(&self, keyword: &str, place: Arc<PlaceInfo>) {
        self.places.insert(cache_key(keyword).to_string(), place).await;
    }

    /// Approximate entry count (moka applies writes lazily).
    pub fn entry_count(&self) -> u64 {
        self.places.entry_count()
    }

    pub fn invalidate_all(&self) {
        self.places.invalidate_all();
    }
}

fn cache_key(keyword: &str) -> &str {
    keyword.trim()
}

/// Geocoding client with caching.
pub struct CachedGeocodeClient {
    client: GeocodeClient,
    cache: PlaceCache,
}

impl CachedGeocodeClient {
    pub fn new(client: GeocodeClient, cache_config: &PlaceCacheConfig) -> Self {
        Self {
            client,
            cache: PlaceCache::new(cache_config),
        }
    }

    /// Best match for a keyword, from cache if available.
    pub async fn lookup(&self, keyword: &str) -> Result<Arc<PlaceInfo>, GeocodeError> {
        if let Some(cached) = self.cache.get(keyword).await {
            debug!(keyword, "place cache hit");
            return Ok(cached);
        }

        let place = Arc::new(self.client.lookup(cache_key(keyword)).await?);
        self.cache.insert(keyword, place.clone()).await;

        Ok(place)
    }

    pub fn cache(&self) -> &PlaceCache {
        &self.cache
    }
}

/// Synchronous [`PlaceResolver`] over the cached async client.
///
/// Inside a multi-threaded runtime the lookup runs under
/// `block_in_place`; from a plain thread it blocks on the stored handle.
/// A current-thread runtime cannot block in place, so calls from one fail
/// with `ResolveError::Upstream` without attempting the lookup.
#[derive(Clone)]
pub struct BlockingPlaceResolver {
    client: Arc<CachedGeocodeClient>,
    handle: Handle,
}

impl BlockingPlaceResolver {
    pub fn new(client: Arc<CachedGeocodeClient>, handle: Handle) -> Self {
        Self { client, handle }
    }

    /// Build from inside a runtime, capturing its handle.
    pub fn current(client: Arc<CachedGeocodeClient>) -> Self {
        Self::new(client, Handle::current())
    }
}

impl PlaceResolver for BlockingPlaceResolver {
    fn resolve(&self, keyword: &str) -> Result<PlaceInfo, ResolveError> {
        let lookup = self.client.lookup(keyword);
        let result = match Handle::try_current().map(|h| h.runtime_flavor()) {
            Ok(RuntimeFlavor::CurrentThread) => {
                warn!(keyword, "blocking place lookup from a current-thread runtime");
                return Err(ResolveError::Upstream(
                    "cannot block inside a current-thread runtime".to_string(),
                ));
            }
            Ok(_) => tokio::task::block_in_place(|| self.handle.block_on(lookup)),
            Err(_) => self.handle.block_on(lookup),
        };

        match result {
            Ok(place) => Ok(PlaceInfo::clone(&place)),
            Err(GeocodeError::NoMatch) => Err(ResolveError::NoMatch),
            Err(e) => {
                warn!(keyword, error = %e, "geocoding failed");
                Err(ResolveError::Upstream(e.to_string()))
            }
        }
    }
}

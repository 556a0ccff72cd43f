//! Mock place resolver for testing without API access.
//!
//! Serves places from an in-memory table, optionally loaded from a JSON
//! file mapping keywords to places.

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::debug;

use crate::domain::PlaceInfo;
use crate::itinerary::{PlaceResolver, ResolveError};

use super::error::GeocodeError;

/// Resolver over a fixed keyword table.
///
/// Keywords are matched after trimming. Every call is counted, hits and
/// misses alike.
#[derive(Debug, Default)]
pub struct MockPlaceResolver {
    places: HashMap<String, PlaceInfo>,
    calls: AtomicUsize,
}

impl MockPlaceResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_place(mut self, keyword: impl Into<String>, place: PlaceInfo) -> Self {
        self.places.insert(keyword.into().trim().to_string(), place);
        self
    }

    /// Load a table from a JSON object of `{ "keyword": PlaceInfo, ... }`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, GeocodeError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path)
            .map_err(|e| GeocodeError::Fixture(format!("failed to read {path:?}: {e}")))?;

        let places: HashMap<String, PlaceInfo> = serde_json::from_str(&json)
            .map_err(|e| GeocodeError::Fixture(format!("failed to parse {path:?}: {e}")))?;

        if places.is_empty() {
            return Err(GeocodeError::Fixture(format!("no places in {path:?}")));
        }

        debug!(count = places.len(), ?path, "loaded mock places");
        Ok(places
            .into_iter()
            .fold(Self::new(), |mock, (keyword, place)| mock.with_place(keyword, place)))
    }

    /// Known keywords, sorted.
    pub fn keywords(&self) -> Vec<&str> {
        let mut keywords: Vec<&str> = self.places.keys().map(String::as_str).collect();
        keywords.sort_unstable();
        keywords
    }

    /// Number of `resolve` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl PlaceResolver for MockPlaceResolver {
    fn resolve(&self, keyword: &str) -> Result<PlaceInfo, ResolveError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.places
            .get(keyword.trim())
            .cloned()
            .ok_or(ResolveError::NoMatch)
    }
}

//! Resolved place data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured address and coordinates for a named place.
///
/// Produced by a place resolver from a free-text keyword and stored on
/// itinerary segments as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceInfo {
    /// Display name of the matched place
    pub place_name: String,

    /// Lot-number address
    pub address_name: String,

    /// Road-name address, empty when the provider has none
    #[serde(default)]
    pub road_address_name: String,

    /// WGS84 longitude
    pub longitude: f64,

    /// WGS84 latitude
    pub latitude: f64,
}

impl PlaceInfo {
    /// The road address if known, otherwise the lot-number address.
    pub fn preferred_address(&self) -> &str {
        if self.road_address_name.is_empty() {
            &self.address_name
        } else {
            &self.road_address_name
        }
    }
}

impl fmt::Display for PlaceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.place_name, self.preferred_address())
    }
}

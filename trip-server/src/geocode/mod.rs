//! Keyword geocoding client.
//!
//! Resolves free-text place names through a Kakao-style local search API:
//! `GET /v2/local/search/keyword.json?query=...`, authorised with a
//! `KakaoAK` REST key. Coordinates come back as strings and are parsed
//! during conversion.

mod client;
mod convert;
mod error;
mod mock;
mod types;

#[cfg(test)]
pub(crate) mod stub;

pub use client::{DEFAULT_BASE_URL, GeocodeClient, GeocodeConfig};
pub use convert::{convert_document, first_place};
pub use error::GeocodeError;
pub use mock::MockPlaceResolver;
pub use types::{KeywordSearchResponse, PlaceDocument, SearchMeta};

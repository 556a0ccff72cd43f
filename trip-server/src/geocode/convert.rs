//! Conversion from wire documents to domain places.

use crate::domain::PlaceInfo;

use super::error::GeocodeError;
use super::types::{KeywordSearchResponse, PlaceDocument};

/// Convert one search hit into a place.
pub fn convert_document(doc: &PlaceDocument) -> Result<PlaceInfo, GeocodeError> {
    Ok(PlaceInfo {
        place_name: doc.place_name.clone(),
        address_name: doc.address_name.clone(),
        road_address_name: doc.road_address_name.clone(),
        longitude: parse_coordinate("x", &doc.x)?,
        latitude: parse_coordinate("y", &doc.y)?,
    })
}

/// The best match of a search: the first document, in API ranking order.
pub fn first_place(response: &KeywordSearchResponse) -> Result<PlaceInfo, GeocodeError> {
    response
        .documents
        .first()
        .ok_or(GeocodeError::NoMatch)
        .and_then(convert_document)
}

fn parse_coordinate(field: &str, value: &str) -> Result<f64, GeocodeError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GeocodeError::Json {
            message: format!("invalid coordinate {field}: {value:?}"),
        })
}

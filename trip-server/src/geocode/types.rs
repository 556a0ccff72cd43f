//! Wire types for the keyword search API.
//!
//! Only the fields the service reads are declared; the API sends more.

use serde::Deserialize;

/// Response of `GET /v2/local/search/keyword.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordSearchResponse {
    pub documents: Vec<PlaceDocument>,

    #[serde(default)]
    pub meta: Option<SearchMeta>,
}

/// Paging metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchMeta {
    #[serde(default)]
    pub total_count: u32,

    #[serde(default)]
    pub is_end: bool,
}

/// One search hit.
///
/// Coordinates arrive as decimal strings: `x` is longitude, `y` latitude.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDocument {
    pub place_name: String,
    pub address_name: String,

    #[serde(default)]
    pub road_address_name: String,

    pub x: String,
    pub y: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_search_response() {
        let json = r#"{
            "meta": {"total_count": 2, "pageable_count": 2, "is_end": true},
            "documents": [
                {
                    "id": "8134827",
                    "place_name": "Gyeongbokgung",
                    "category_name": "Travel > Landmark",
                    "address_name": "Seoul Jongno-gu Sejongno 1-1",
                    "road_address_name": "Seoul Jongno-gu Sajik-ro 161",
                    "x": "126.977041",
                    "y": "37.579617"
                },
                {
                    "place_name": "Gyeongbokgung Station",
                    "address_name": "Seoul Jongno-gu Jeokseon-dong 1",
                    "road_address_name": "",
                    "x": "126.973555",
                    "y": "37.575762"
                }
            ]
        }"#;

        let response: KeywordSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.documents.len(), 2);
        assert_eq!(response.documents[0].place_name, "Gyeongbokgung");
        assert_eq!(response.documents[0].x, "126.977041");
        assert!(response.documents[1].road_address_name.is_empty());

        let meta = response.meta.unwrap();
        assert_eq!(meta.total_count, 2);
        assert!(meta.is_end);
    }

    #[test]
    fn missing_road_address_defaults_empty() {
        let json = r#"{"documents": [
            {"place_name": "Pier", "address_name": "Busan", "x": "129.0", "y": "35.1"}
        ]}"#;
        let response: KeywordSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.documents[0].road_address_name, "");
        assert!(response.meta.is_none());
    }
}

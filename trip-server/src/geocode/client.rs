//! Keyword search API client.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use tracing::debug;

use crate::domain::PlaceInfo;

use super::convert::{convert_document, first_place};
use super::error::GeocodeError;
use super::types::KeywordSearchResponse;

/// Default base URL for the keyword search API.
pub const DEFAULT_BASE_URL: &str = "https://dapi.kakao.com";

const KEYWORD_SEARCH_PATH: &str = "/v2/local/search/keyword.json";

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// REST API key, sent as `Authorization: KakaoAK {key}`
    pub api_key: String,

    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Documents requested per search (the API allows 1 to 15)
    pub page_size: u8,
}

impl GeocodeConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            page_size: 5,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the page size, clamped to the range the API accepts.
    pub fn with_page_size(mut self, size: u8) -> Self {
        self.page_size = size.clamp(1, 15);
        self
    }
}

/// Client for the keyword search API.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: String,
    page_size: u8,
}

impl GeocodeClient {
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let mut headers = HeaderMap::new();

        let auth = HeaderValue::from_str(&format!("KakaoAK {}", config.api_key)).map_err(|_| {
            GeocodeError::Api {
                status: 0,
                message: "Invalid API key format".to_string(),
            }
        })?;
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size,
        })
    }

    /// Search places by keyword, in API ranking order.
    ///
    /// An empty result is `Ok` with no places.
    pub async fn search_keyword(&self, keyword: &str) -> Result<Vec<PlaceInfo>, GeocodeError> {
        let response = self.fetch(keyword).await?;
        response.documents.iter().map(convert_document).collect()
    }

    /// The best match for a keyword. Fails with `NoMatch` if there is none.
    pub async fn lookup(&self, keyword: &str) -> Result<PlaceInfo, GeocodeError> {
        let response = self.fetch(keyword).await?;
        first_place(&response)
    }

    async fn fetch(&self, keyword: &str) -> Result<KeywordSearchResponse, GeocodeError> {
        let url = format!("{}{}", self.base_url, KEYWORD_SEARCH_PATH);
        let size = self.page_size.to_string();

        debug!(keyword, "keyword search");
        let response = self
            .http
            .get(&url)
            .query(&[("query", keyword), ("size", size.as_str())])
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(GeocodeError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodeError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
            message: e.to_string(),
        })
    }
}

//! Geocoding client error types.

/// Errors from the keyword search API and its stand-ins.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Invalid API key or unauthorized
    #[error("unauthorized (invalid API key)")]
    Unauthorized,

    #[error("rate limited by geocoding API")]
    RateLimited,

    /// The search returned no documents
    #[error("no place matches the keyword")]
    NoMatch,

    /// Mock place data could not be loaded
    #[error("mock place data: {0}")]
    Fixture(String),
}

//! MBTA client error types.

/// Errors that can occur when fetching transit data.
///
/// Every failure mode of a fetch surfaces as one of these variants; raw
/// transport errors never escape the client.
#[derive(Debug, thiserror::Error)]
pub enum MbtaError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Authentication failed
    #[error("unauthorized: check MBTA_API_KEY")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by MBTA API")]
    RateLimited,

    /// Mock fixture could not be loaded
    #[error("mock data error: {message}")]
    Mock { message: String },
}

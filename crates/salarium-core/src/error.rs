use thiserror::Error;

/// Application-wide error types for salarium.
#[derive(Error, Debug)]
pub enum AppError {
    /// Non-success HTTP status from a job API. Aborts the whole run for
    /// the source that produced it; never retried.
    #[error("HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    /// HTTP request failed before a status was available.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Network/connection error.
    #[error("Network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// The location directory of a source has no exact match for the
    /// requested place name. Fatal; there is no fallback location.
    #[error("{website} has no location named '{place}'")]
    LocationNotFound { website: String, place: String },

    /// JSON serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Returns true if this error came from the remote API rather than
    /// local transport trouble.
    pub fn is_server_side(&self) -> bool {
        matches!(self, AppError::HttpStatus { .. })
    }
}

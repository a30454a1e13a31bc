//! Error types for notegrid-core

use thiserror::Error;

/// Result type alias for notes API calls
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Transport-level errors raised while talking to the notes API
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request could not be sent or the response could not be read
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("Failed to parse JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Server answered with a non-success status code
    #[error("Request failed with status code {status}: {message}")]
    Status { status: u16, message: String },

    /// Client configuration is unusable
    #[error("Invalid API configuration: {0}")]
    InvalidConfiguration(String),
}

/// Why a board operation did not apply its state update.
///
/// Mirrors the two error tiers of the notes API: the server may accept the
/// request but report `success: false`, or the round trip itself may fail.
#[derive(Error, Debug)]
pub enum Failure {
    /// The server answered but flagged the request as failed
    #[error("{0}")]
    Rejected(String),

    /// The request never produced a usable answer
    #[error(transparent)]
    Transport(#[from] ApiError),

    /// The request was refused locally before anything was sent
    #[error("{0}")]
    Invalid(String),
}

impl Failure {
    /// Message shown to the user for this failure.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

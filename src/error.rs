//! Error types for backend fetches.

use thiserror::Error;

/// Fixed user-facing message for a failed task fetch. The UI never
/// distinguishes transport failures from decode failures.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch tasks";

/// A failed round-trip to the backend.
///
/// Two causes exist, but call sites collapse them into one outcome: the
/// variant matters for logs, not for what the user sees.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS, or other transport-level failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not the JSON shape the client expects.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// The single message surfaced to the user regardless of cause.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

/// Result type for backend fetches.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

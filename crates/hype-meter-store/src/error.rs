use thiserror::Error;

/// Any reason the shared document could not be read or written.
///
/// Callers in the review flow treat every variant the same way (fall back or
/// drop); the variants exist for logging.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request to document store failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("document store returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed document: {0}")]
    Malformed(String),

    #[error("failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),
}

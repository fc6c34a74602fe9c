use thiserror::Error;

/// Boundary errors only: the formatting core is total over its inputs and
/// never produces one of these.
#[derive(Error, Debug)]
pub enum TranscriptError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Clipboard operation failed: {0}")]
    ClipboardError(#[from] arboard::Error),

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, TranscriptError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("invalid entry: {0}")]
    InvalidEntry(String),

    #[error("unknown time range '{0}', expected week, month, quarter or year")]
    InvalidTimeRange(String),

    #[error("failed to access journal data: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode or decode journal data: {0}")]
    Json(#[from] serde_json::Error),
}

impl JournalError {
    pub fn invalid_entry(message: impl Into<String>) -> Self {
        Self::InvalidEntry(message.into())
    }
}

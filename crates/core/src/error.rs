#[derive(Debug, thiserror::Error)]
pub enum CdsError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unsupported disease: {0}")]
    UnsupportedDisease(String),
    #[error("pathway failed validation: {0}")]
    ValidationFailed(String),
    #[error("failed to read reference data file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to deserialize reference data: {0}")]
    Deserialization(serde_json::Error),
}

impl CdsError {
    /// True when the failure was caused by the caller's request rather than by the server or
    /// its reference data.
    pub fn is_client_error(&self) -> bool {
        matches!(self, CdsError::UnsupportedDisease(_))
    }
}

pub type CdsResult<T> = std::result::Result<T, CdsError>;

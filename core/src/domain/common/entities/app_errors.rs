use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Required configuration (e.g. the model credential) is missing.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The image locator could not be dereferenced.
    #[error("Failed to fetch image: {0}")]
    FetchError(String),

    /// The image payload is not usable (bad data URI, empty body, invalid base64).
    #[error("Invalid image format: {0}")]
    FormatError(String),

    /// A remote service answered with a non-success status.
    #[error("Upstream service error: {0}")]
    UpstreamError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Image encoding failures are reported to users as one class.
    pub fn is_image_error(&self) -> bool {
        matches!(self, CoreError::FetchError(_) | CoreError::FormatError(_))
    }
}

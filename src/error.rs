// Error types for the client boundary and the service layer

use thiserror::Error;

/// Errors crossing the data-source boundary.
///
/// The backend reports failures as a JSON body carrying a machine-readable
/// `code` alongside the human message; the HTTP layer maps that code (plus the
/// status) into these variants so callers never have to pattern-match message
/// text.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The requested slug is already assigned to another operation (HTTP 409 /
    /// code `SLUG_TAKEN`). Drives the create retry in the service layer.
    #[error("operation slug already exists: {0}")]
    SlugTaken(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Any other structured backend error, surfaced unchanged
    #[error("backend error ({code}): {message}")]
    Api { code: String, message: String },

    /// Network or response-decoding failure below the API contract
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

impl ClientError {
    /// Machine-readable code for logs and JSON CLI output
    pub fn code(&self) -> &str {
        match self {
            ClientError::SlugTaken(_) => "SLUG_TAKEN",
            ClientError::NotFound(_) => "NOT_FOUND",
            ClientError::Unauthorized(_) => "UNAUTHORIZED",
            ClientError::Api { code, .. } => code,
            ClientError::Transport(_) => "TRANSPORT",
            ClientError::BaseUrl(_) => "BAD_BASE_URL",
        }
    }
}

/// Errors returned by [`OperationService`](crate::services::OperationService)
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input rejected before any backend call was made
    #[error("{0}")]
    Validation(String),

    /// Backend call failed; propagated unchanged
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl ServiceError {
    pub fn code(&self) -> &str {
        match self {
            ServiceError::Validation(_) => "VALIDATION_ERROR",
            ServiceError::Client(err) => err.code(),
        }
    }
}

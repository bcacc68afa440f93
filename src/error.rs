// src/error.rs
use crate::core::html::SelectorError;
use crate::core::net::NetError;

/// Why an adapter run failed. Each kind maps to one HTTP-facing status.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// Upstream has no matching content.
    #[error("{0}")]
    NotFound(String),
    /// Upstream answered with a non-success status.
    #[error("{message}")]
    Upstream { status: u16, message: String },
    /// Upstream answered, but not in a shape we can read.
    #[error("{0}")]
    UnexpectedFormat(String),
    #[error("{0}")]
    Internal(String),
}

impl IngestError {
    pub fn status_code(&self) -> u16 {
        match self {
            IngestError::NotFound(_) => 404,
            IngestError::Upstream { .. } => 502,
            IngestError::UnexpectedFormat(_) | IngestError::Internal(_) => 500,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            IngestError::NotFound(_) => "not_found",
            IngestError::Upstream { .. } => "upstream_error",
            IngestError::UnexpectedFormat(_) => "unexpected_format",
            IngestError::Internal(_) => "internal_error",
        }
    }
}

impl From<NetError> for IngestError {
    fn from(e: NetError) -> Self {
        IngestError::Internal(e.to_string())
    }
}

impl From<SelectorError> for IngestError {
    fn from(e: SelectorError) -> Self {
        IngestError::Internal(e.to_string())
    }
}

impl From<serde_json::Error> for IngestError {
    fn from(e: serde_json::Error) -> Self {
        IngestError::UnexpectedFormat(e.to_string())
    }
}

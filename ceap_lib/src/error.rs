//! Error types for the domain layer.

use std::fmt;

/// Errors produced by the domain layer, wrapping upstream API errors and
/// adding input validation failures.
#[derive(Debug)]
pub enum CeapError {
    /// An error from the underlying API client.
    Api(camara_api::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for CeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for CeapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<camara_api::Error> for CeapError {
    fn from(e: camara_api::Error) -> Self {
        Self::Api(e)
    }
}

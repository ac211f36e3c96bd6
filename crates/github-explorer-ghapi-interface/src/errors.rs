//! API errors.

use thiserror::Error;

/// API error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-success response from the GitHub API.
    #[error("GitHub API error: {status}")]
    GitHubStatus { status: u16 },

    /// File content served with an encoding other than base64.
    #[error("Unsupported file encoding: {encoding}")]
    UnsupportedEncoding { encoding: String },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl ApiError {
    /// Wrap an implementation-specific error.
    pub fn implementation<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImplementationError {
            source: Box::new(source),
        }
    }
}

/// Result alias for `ApiError`.
pub type Result<T, E = ApiError> = core::result::Result<T, E>;

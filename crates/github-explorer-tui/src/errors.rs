//! UI errors.

use github_explorer_ghapi_interface::ApiError;
use thiserror::Error;

/// UI error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum UiError {
    /// Wraps [`std::io::Error`].
    #[error("I/O error,\n  caused by: {}", source)]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Wraps [`github_explorer_ghapi_interface::ApiError`].
    #[error("GitHub API error,\n  caused by: {}", source)]
    Api {
        #[from]
        source: ApiError,
    },
}

/// Result alias for `UiError`.
pub type Result<T> = core::result::Result<T, UiError>;

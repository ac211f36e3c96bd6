//! UI events.

use github_explorer_ghapi_interface::{
    types::{GhContentEntry, GhRepository},
    ApiError,
};

use crate::errors::UiError;

/// Outcome of a background API task.
///
/// Each variant carries the search generation or explorer session it was
/// spawned under, so stale results can be discarded after the owning view
/// has been replaced.
#[derive(Debug)]
pub enum AppEvent {
    /// A repository search finished.
    SearchFinished {
        /// Search generation the request was tagged with.
        generation: u64,
        /// Search outcome.
        result: Result<Vec<GhRepository>, ApiError>,
    },
    /// Root contents of the selected repository were fetched.
    RootLoaded {
        /// Explorer session the request belongs to.
        session: u64,
        /// Fetch outcome.
        result: Result<Vec<GhContentEntry>, ApiError>,
    },
    /// Children of an expanded folder were fetched.
    FolderLoaded {
        /// Explorer session the request belongs to.
        session: u64,
        /// Folder path.
        path: String,
        /// Fetch outcome.
        result: Result<Vec<GhContentEntry>, ApiError>,
    },
    /// A file download finished.
    DownloadFinished {
        /// Explorer session the request belongs to.
        session: u64,
        /// File path.
        path: String,
        /// Download outcome.
        result: Result<(), UiError>,
    },
}

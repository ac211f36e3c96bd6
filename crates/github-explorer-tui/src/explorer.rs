//! File explorer session state.

use std::collections::{HashMap, HashSet};

use github_explorer_ghapi_interface::{
    types::{GhContentEntry, GhRepository},
    ApiError,
};
use tui::widgets::ListState;

/// Fixed banner shown when the root contents fetch fails. Folder and
/// download failures are logged only, with no banner.
pub const CONTENTS_ERROR_MESSAGE: &str = "Failed to fetch repository contents. Please try again.";

/// Root contents status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootStatus {
    /// Root fetch in flight.
    Loading,
    /// Root contents available.
    Loaded,
    /// Root fetch failed.
    Error,
}

/// Per-path folder fetch state.
///
/// One map entry per encountered directory path keeps each path's state
/// machine atomic; a path absent from the map has never been fetched.
#[derive(Debug)]
pub enum FolderState {
    /// Child fetch in flight.
    Pending,
    /// Children fetched and cached for the session lifetime.
    Loaded(Vec<GhContentEntry>),
    /// Fetch failed; rendered as an empty subtree.
    Failed,
}

/// One visible row of the explorer tree.
#[derive(Debug)]
pub enum TreeRow<'a> {
    /// A content entry.
    Entry {
        entry: &'a GhContentEntry,
        depth: usize,
    },
    /// A placeholder line under an expanded folder.
    Placeholder { text: &'static str, depth: usize },
}

/// State of one file-explorer session, bound to one repository.
///
/// Discarded wholesale when the user goes back to the search results;
/// nothing is shared across repository sessions.
pub struct ExplorerSession {
    pub repository: GhRepository,
    /// Session id; late task results tagged with another id are discarded.
    pub session: u64,
    pub root_status: RootStatus,
    pub root_contents: Vec<GhContentEntry>,
    pub list_state: ListState,
    expanded: HashSet<String>,
    folders: HashMap<String, FolderState>,
    downloading: HashSet<String>,
}

impl ExplorerSession {
    pub fn new(repository: GhRepository, session: u64) -> Self {
        Self {
            repository,
            session,
            root_status: RootStatus::Loading,
            root_contents: Vec::new(),
            list_state: ListState::default(),
            expanded: HashSet::new(),
            folders: HashMap::new(),
            downloading: HashSet::new(),
        }
    }

    /// Apply the root contents fetch outcome.
    pub fn finish_root(&mut self, result: Result<Vec<GhContentEntry>, ApiError>) {
        match result {
            Ok(contents) => {
                self.root_contents = contents;
                self.root_status = RootStatus::Loaded;
                if !self.root_contents.is_empty() {
                    self.list_state.select(Some(0));
                }
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    repository = %self.repository.full_name,
                    "failed to fetch repository contents",
                );
                self.root_status = RootStatus::Error;
            }
        }
    }

    /// Toggle a folder's expansion.
    ///
    /// Returns `true` when a child fetch must be issued for this path:
    /// only on first expansion, or when a previous fetch failed. Cached
    /// children survive any number of collapse cycles.
    pub fn toggle_folder(&mut self, path: &str) -> bool {
        if self.expanded.contains(path) {
            self.expanded.remove(path);
            self.clamp_selection();
            return false;
        }

        self.expanded.insert(path.to_owned());
        match self.folders.get(path) {
            None | Some(FolderState::Failed) => {
                self.folders.insert(path.to_owned(), FolderState::Pending);
                true
            }
            Some(FolderState::Pending) | Some(FolderState::Loaded(_)) => false,
        }
    }

    /// Apply a folder fetch outcome. Failures are logged only: the folder
    /// silently renders without children.
    pub fn finish_folder(&mut self, path: String, result: Result<Vec<GhContentEntry>, ApiError>) {
        // Only a pending entry can complete; anything else is a stale echo.
        if !matches!(self.folders.get(&path), Some(FolderState::Pending)) {
            return;
        }

        match result {
            Ok(children) => {
                self.folders.insert(path, FolderState::Loaded(children));
            }
            Err(err) => {
                tracing::error!(error = %err, path = %path, "failed to fetch folder contents");
                self.folders.insert(path, FolderState::Failed);
            }
        }
        self.clamp_selection();
    }

    /// Mark a file download as started. Returns `false` when this file is
    /// already downloading.
    pub fn begin_download(&mut self, path: &str) -> bool {
        self.downloading.insert(path.to_owned())
    }

    /// Clear a file's download flag. Failures are logged only.
    pub fn finish_download(&mut self, path: &str, result: crate::errors::Result<()>) {
        self.downloading.remove(path);
        if let Err(err) = result {
            tracing::error!(error = %err, path = %path, "failed to download file");
        }
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    pub fn is_folder_pending(&self, path: &str) -> bool {
        matches!(self.folders.get(path), Some(FolderState::Pending))
    }

    pub fn is_downloading(&self, path: &str) -> bool {
        self.downloading.contains(path)
    }

    /// Flatten the currently visible tree: fetched paths whose ancestors
    /// are all expanded, depth-first. Nothing is fetched here.
    pub fn rows(&self) -> Vec<TreeRow<'_>> {
        let mut rows = Vec::new();
        self.push_rows(&self.root_contents, 0, &mut rows);
        rows
    }

    fn push_rows<'a>(
        &'a self,
        entries: &'a [GhContentEntry],
        depth: usize,
        rows: &mut Vec<TreeRow<'a>>,
    ) {
        for entry in entries {
            rows.push(TreeRow::Entry { entry, depth });

            if entry.is_dir() && self.expanded.contains(&entry.path) {
                match self.folders.get(&entry.path) {
                    Some(FolderState::Pending) => rows.push(TreeRow::Placeholder {
                        text: "Loading...",
                        depth: depth + 1,
                    }),
                    Some(FolderState::Loaded(children)) if children.is_empty() => {
                        rows.push(TreeRow::Placeholder {
                            text: "Empty folder",
                            depth: depth + 1,
                        });
                    }
                    Some(FolderState::Loaded(children)) => {
                        self.push_rows(children, depth + 1, rows);
                    }
                    // Failed folders silently show no children.
                    Some(FolderState::Failed) | None => {}
                }
            }
        }
    }

    /// The entry under the cursor, if the cursor is on an entry row.
    pub fn selected_entry(&self) -> Option<&GhContentEntry> {
        let rows = self.rows();
        match self.list_state.selected().and_then(|i| rows.get(i)) {
            Some(TreeRow::Entry { entry, .. }) => Some(*entry),
            _ => None,
        }
    }

    pub fn next_row(&mut self) {
        let len = self.rows().len();
        if len == 0 {
            return;
        }

        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous_row(&mut self) {
        let len = self.rows().len();
        if len == 0 {
            return;
        }

        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn clamp_selection(&mut self) {
        let len = self.rows().len();
        if len == 0 {
            self.list_state.select(None);
        } else if let Some(i) = self.list_state.selected() {
            if i >= len {
                self.list_state.select(Some(len - 1));
            }
        }
    }
}

use serde::{Deserialize, Serialize};

use super::GhUser;

/// GitHub Repository.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhRepository {
    /// ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Full name (`owner/name`).
    pub full_name: String,
    /// Owner.
    pub owner: GhUser,
    /// Web URL.
    pub html_url: String,
    /// Description.
    pub description: Option<String>,
    /// Star count.
    pub stargazers_count: u64,
    /// Watcher count.
    pub watchers_count: u64,
    /// Fork count.
    pub forks_count: u64,
    /// Primary language.
    pub language: Option<String>,
    /// Default branch name.
    pub default_branch: String,
}

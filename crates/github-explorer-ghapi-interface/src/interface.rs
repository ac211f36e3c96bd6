use async_trait::async_trait;

use crate::{
    types::{GhContentEntry, GhRepository},
    Result,
};

/// GitHub API adapter interface.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Search repositories, ranked by descending star count.
    async fn repositories_search(&self, query: &str) -> Result<Vec<GhRepository>>;
    /// List the immediate children of a repository path.
    ///
    /// An empty `path` targets the repository root.
    async fn contents_list(
        &self,
        owner: &str,
        name: &str,
        path: &str,
    ) -> Result<Vec<GhContentEntry>>;
    /// Fetch a single file and decode its content into text.
    async fn file_content_get(&self, owner: &str, name: &str, path: &str) -> Result<String>;
}

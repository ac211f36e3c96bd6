//! GitHub adapter.

use async_trait::async_trait;
use github_explorer_config::Config;
use github_explorer_ghapi_interface::{
    types::{GhContentEntry, GhRepository},
    ApiError, ApiService, Result,
};
use reqwest::Client;
use serde::Deserialize;

use crate::client::{build_github_url, get_client_builder};

const SEARCH_RESULTS_PER_PAGE: u32 = 12;

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
}

impl GithubApiService {
    /// Creates a new GitHub API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client> {
        get_client_builder(&self.config)
            .build()
            .map_err(ApiError::implementation)
    }

    fn build_url(&self, path: String) -> String {
        build_github_url(&self.config, path)
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ApiError::GitHubStatus {
            status: response.status().as_u16(),
        })
    }
}

/// A contents route answers with a collection for a directory, but with a
/// bare object when the path names a single file.
#[derive(Deserialize)]
#[serde(untagged)]
enum ContentsResponse {
    Many(Vec<GhContentEntry>),
    One(Box<GhContentEntry>),
}

impl From<ContentsResponse> for Vec<GhContentEntry> {
    fn from(response: ContentsResponse) -> Self {
        match response {
            ContentsResponse::Many(entries) => entries,
            ContentsResponse::One(entry) => vec![*entry],
        }
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self))]
    async fn repositories_search(&self, query: &str) -> Result<Vec<GhRepository>> {
        #[derive(Deserialize)]
        struct Response {
            items: Vec<GhRepository>,
        }

        let response = self
            .get_client()?
            .get(self.build_url("/search/repositories".into()))
            .query(&[
                ("q", query),
                ("sort", "stars"),
                ("order", "desc"),
                ("per_page", &SEARCH_RESULTS_PER_PAGE.to_string()),
            ])
            .send()
            .await
            .map_err(ApiError::implementation)?;

        Ok(check_status(response)?
            .json::<Response>()
            .await
            .map_err(ApiError::implementation)?
            .items)
    }

    #[tracing::instrument(skip(self))]
    async fn contents_list(
        &self,
        owner: &str,
        name: &str,
        path: &str,
    ) -> Result<Vec<GhContentEntry>> {
        let url = if path.is_empty() {
            self.build_url(format!("/repos/{owner}/{name}/contents"))
        } else {
            self.build_url(format!("/repos/{owner}/{name}/contents/{path}"))
        };

        let response = self
            .get_client()?
            .get(url)
            .send()
            .await
            .map_err(ApiError::implementation)?;

        Ok(check_status(response)?
            .json::<ContentsResponse>()
            .await
            .map_err(ApiError::implementation)?
            .into())
    }

    #[tracing::instrument(skip(self))]
    async fn file_content_get(&self, owner: &str, name: &str, path: &str) -> Result<String> {
        let response = self
            .get_client()?
            .get(self.build_url(format!("/repos/{owner}/{name}/contents/{path}")))
            .send()
            .await
            .map_err(ApiError::implementation)?;

        check_status(response)?
            .json::<GhContentEntry>()
            .await
            .map_err(ApiError::implementation)?
            .decoded_content()
    }
}

#[cfg(test)]
mod tests {
    use github_explorer_ghapi_interface::types::{GhContentEntry, GhContentType};
    use pretty_assertions::assert_eq;

    use super::ContentsResponse;

    const FILE_OBJECT: &str = r#"{
        "name": "README.md",
        "path": "README.md",
        "sha": "abc123",
        "size": 14,
        "url": "https://api.github.com/repos/o/r/contents/README.md",
        "html_url": "https://github.com/o/r/blob/master/README.md",
        "git_url": "https://api.github.com/repos/o/r/git/blobs/abc123",
        "download_url": "https://raw.githubusercontent.com/o/r/master/README.md",
        "type": "file"
    }"#;

    #[test]
    fn single_object_response_normalizes_to_one_element() {
        let response: ContentsResponse = serde_json::from_str(FILE_OBJECT).unwrap();
        let entries: Vec<GhContentEntry> = response.into();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "README.md");
        assert_eq!(entries[0].content_type, GhContentType::File);
    }

    #[test]
    fn collection_response_keeps_all_entries() {
        let response: ContentsResponse =
            serde_json::from_str(&format!("[{FILE_OBJECT}, {FILE_OBJECT}]")).unwrap();
        let entries: Vec<GhContentEntry> = response.into();

        assert_eq!(entries.len(), 2);
    }
}

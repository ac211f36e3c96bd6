//! GitHub API adapter.

mod adapter;
mod client;

pub use adapter::GithubApiService;

//! HTTP client setup.

use std::time::Duration;

use github_explorer_config::Config;
use http::{header, HeaderMap};
use reqwest::ClientBuilder;

/// Get an anonymous GitHub client builder.
///
/// No authentication token is sent; calls rely on the API's
/// unauthenticated rate limits.
pub fn get_client_builder(config: &Config) -> ClientBuilder {
    const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/vnd.github.v3+json"),
    );

    ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.github_api_connect_timeout))
        .user_agent(format!("github-explorer/{APP_VERSION}"))
        .default_headers(headers)
}

/// Build a GitHub URL.
pub fn build_github_url<T: Into<String>>(config: &Config, path: T) -> String {
    format!("{}{}", config.github_api_root_url, path.into())
}

#[cfg(test)]
mod tests {
    use github_explorer_config::Config;
    use pretty_assertions::assert_eq;

    use super::build_github_url;

    #[test]
    fn github_url_uses_configured_root() {
        let config = Config {
            github_api_root_url: "https://github.example.com/api".into(),
            ..Config::from_env()
        };

        assert_eq!(
            build_github_url(&config, "/search/repositories"),
            "https://github.example.com/api/search/repositories"
        );
    }
}

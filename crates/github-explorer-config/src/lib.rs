//! Config module.

use std::env;

/// Explorer configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory where downloaded files are saved.
    pub download_directory: String,
    /// GitHub API connect timeout (in milliseconds).
    pub github_api_connect_timeout: u64,
    /// GitHub API root URL.
    pub github_api_root_url: String,
    /// Use bunyan logging.
    pub logging_use_bunyan: bool,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env() -> Config {
        Config {
            download_directory: env_to_str("EXPLORER_DOWNLOAD_DIRECTORY", "."),
            github_api_connect_timeout: env_to_u64("EXPLORER_GITHUB_API_CONNECT_TIMEOUT", 5000),
            github_api_root_url: env_to_str(
                "EXPLORER_GITHUB_API_ROOT_URL",
                "https://api.github.com",
            ),
            logging_use_bunyan: env_to_bool("EXPLORER_LOGGING_USE_BUNYAN", false),
        }
    }
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_e| default.to_string())
}

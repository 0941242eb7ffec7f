use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Storefront settings
///
/// Environment variables:
/// - STOREFRONT_API_URL: base URL of the REST API (default: "http://127.0.0.1:8080")
/// - STOREFRONT_STORAGE_PATH: cart file (default: "./storefront-cart.json")
/// - STOREFRONT_HTTP_TIMEOUT_SECS: catalog request timeout (default: 30)
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    pub api_url: String,
    pub storage_path: PathBuf,
    pub http_timeout: Duration,
}

impl StorefrontConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup("STOREFRONT_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| "http://127.0.0.1:8080".to_string());
        let storage_path = lookup("STOREFRONT_STORAGE_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./storefront-cart.json"));
        let timeout_secs = lookup("STOREFRONT_HTTP_TIMEOUT_SECS")
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(30);

        Self {
            api_url,
            storage_path,
            http_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

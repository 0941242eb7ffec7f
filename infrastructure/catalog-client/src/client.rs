use std::time::Duration;

use reqwest::Client;

/// Shared HTTP client configuration for the product REST API.
pub struct CatalogClient {
    pub client: Client,
    pub base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Returns the product collection endpoint URL.
    pub fn products_url(&self) -> String {
        format!("{}/api/products", self.base_url)
    }
}

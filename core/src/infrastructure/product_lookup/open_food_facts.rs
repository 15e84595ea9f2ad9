use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::error;

use crate::domain::{
    common::{ProductLookupConfig, entities::app_errors::CoreError},
    product_lookup::{entities::ProductCandidate, ports::ProductLookup},
};

/// Text search against the Open Food Facts product database.
#[derive(Debug, Clone)]
pub struct OpenFoodFactsClient {
    base_url: String,
    page_size: u32,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    products: Vec<OffProduct>,
}

#[derive(Debug, Deserialize)]
struct OffProduct {
    product_name: Option<String>,
    brands: Option<String>,
    ingredients_text: Option<String>,
    image_url: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl OffProduct {
    /// `None` for products without a usable name.
    fn into_candidate(self) -> Option<ProductCandidate> {
        Some(ProductCandidate {
            product_name: non_blank(self.product_name)?,
            brand: non_blank(self.brands),
            ingredients_text: non_blank(self.ingredients_text),
            image_url: non_blank(self.image_url),
        })
    }
}

impl OpenFoodFactsClient {
    pub fn new(config: &ProductLookupConfig, timeout_seconds: u64) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .user_agent(concat!("label-slayer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                CoreError::ConfigurationError(format!("invalid HTTP client settings: {}", e))
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size,
            client,
        })
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/cgi/search.pl?search_terms={}&search_simple=1&action=process&json=1&page_size={}",
            self.base_url,
            urlencoding::encode(query),
            self.page_size
        )
    }
}

impl ProductLookup for OpenFoodFactsClient {
    async fn search(&self, query: String) -> Result<Vec<ProductCandidate>, CoreError> {
        let response = self
            .client
            .get(self.search_url(&query))
            .send()
            .await
            .map_err(|e| {
                error!("Product search request failed: {}", e);
                CoreError::UpstreamError(format!("product search failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Product search returned {}", status);
            return Err(CoreError::UpstreamError(format!(
                "product search returned {}",
                status
            )));
        }

        let body: SearchResponse = response.json().await.map_err(|e| {
            error!("Failed to decode product search response: {}", e);
            CoreError::UpstreamError(format!("invalid product search response: {}", e))
        })?;

        Ok(body
            .products
            .into_iter()
            .filter_map(OffProduct::into_candidate)
            .collect())
    }
}

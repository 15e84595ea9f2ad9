use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    history::ports::HistoryRepository,
    image::ports::ImageFetcher,
    label_analysis::ports::LLMClient,
    product_lookup::{
        entities::ProductCandidate,
        ports::{ProductLookup, ProductLookupService},
    },
};

impl<LLM, IF, HR, PL> ProductLookupService for Service<LLM, IF, HR, PL>
where
    LLM: LLMClient,
    IF: ImageFetcher,
    HR: HistoryRepository,
    PL: ProductLookup,
{
    #[instrument(skip(self))]
    async fn search_products(&self, query: String) -> Result<Vec<ProductCandidate>, CoreError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CoreError::InvalidInput(
                "search query must not be blank".to_string(),
            ));
        }

        let products = self.product_lookup.search(query.to_string()).await?;
        info!(results = products.len(), "Product search completed");

        Ok(products)
    }
}

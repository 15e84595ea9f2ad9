use std::sync::Arc;

use crate::domain::{
    history::{ports::HistoryRepository, services::HistoryStore},
    image::ports::ImageFetcher,
    label_analysis::ports::LLMClient,
    product_lookup::ports::ProductLookup,
};

/// Application service wiring the remote model, the image fetcher, the
/// history store and the product lookup together.
pub struct Service<LLM, IF, HR, PL>
where
    LLM: LLMClient,
    IF: ImageFetcher,
    HR: HistoryRepository,
    PL: ProductLookup,
{
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) image_fetcher: Arc<IF>,
    pub(crate) history_store: HistoryStore<HR>,
    pub(crate) product_lookup: Arc<PL>,
}

impl<LLM, IF, HR, PL> Service<LLM, IF, HR, PL>
where
    LLM: LLMClient,
    IF: ImageFetcher,
    HR: HistoryRepository,
    PL: ProductLookup,
{
    pub fn new(llm_client: LLM, image_fetcher: IF, history_repository: HR, product_lookup: PL) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
            image_fetcher: Arc::new(image_fetcher),
            history_store: HistoryStore::new(Arc::new(history_repository)),
            product_lookup: Arc::new(product_lookup),
        }
    }

    pub fn history(&self) -> &HistoryStore<HR> {
        &self.history_store
    }
}

impl<LLM, IF, HR, PL> Clone for Service<LLM, IF, HR, PL>
where
    LLM: LLMClient,
    IF: ImageFetcher,
    HR: HistoryRepository,
    PL: ProductLookup,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            image_fetcher: Arc::clone(&self.image_fetcher),
            history_store: self.history_store.clone(),
            product_lookup: Arc::clone(&self.product_lookup),
        }
    }
}

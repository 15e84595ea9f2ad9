use tracing::info;

use crate::{
    domain::common::{
        HistoryBackend, LabelSlayerConfig, entities::app_errors::CoreError, services::Service,
    },
    infrastructure::{
        history::{
            HistoryBackendRepository, file_history_repository::FileHistoryRepository,
            memory_history_repository::InMemoryHistoryRepository,
        },
        image::image_fetcher::HttpImageFetcher,
        llm::openai_client::OpenAIChatClient,
        product_lookup::open_food_facts::OpenFoodFactsClient,
    },
};

pub type LabelSlayerService =
    Service<OpenAIChatClient, HttpImageFetcher, HistoryBackendRepository, OpenFoodFactsClient>;

pub async fn create_service(config: LabelSlayerConfig) -> Result<LabelSlayerService, CoreError> {
    let llm_client = OpenAIChatClient::new(&config.llm)?;
    if llm_client.api_key_missing() {
        tracing::warn!("No OpenAI API key configured, analysis requests will be rejected");
    }

    let image_fetcher = HttpImageFetcher::new(config.llm.timeout_seconds, config.image.root)?;
    if image_fetcher.allows_file_locators() {
        info!("Serving file image locators from the configured image root");
    }

    let history_repository = match config.history.backend {
        HistoryBackend::File => {
            if let Err(e) = tokio::fs::create_dir_all(&config.history.data_dir).await {
                tracing::warn!(
                    "Cannot create history directory {}: {}",
                    config.history.data_dir.display(),
                    e
                );
            }
            let repository = FileHistoryRepository::new(&config.history.data_dir);
            info!(path = %repository.path().display(), "Using file history storage");
            HistoryBackendRepository::File(repository)
        }
        HistoryBackend::Memory => {
            info!("Using in-memory history storage");
            HistoryBackendRepository::Memory(InMemoryHistoryRepository::new())
        }
    };

    let product_lookup =
        OpenFoodFactsClient::new(&config.product_lookup, config.llm.timeout_seconds)?;

    Ok(Service::new(
        llm_client,
        image_fetcher,
        history_repository,
        product_lookup,
    ))
}

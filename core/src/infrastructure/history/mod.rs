pub mod file_history_repository;
pub mod memory_history_repository;

use crate::domain::{
    common::entities::app_errors::CoreError,
    history::{entities::HistoryItem, ports::HistoryRepository},
};

use self::{
    file_history_repository::FileHistoryRepository,
    memory_history_repository::InMemoryHistoryRepository,
};

/// History medium chosen at startup.
#[derive(Debug)]
pub enum HistoryBackendRepository {
    File(FileHistoryRepository),
    Memory(InMemoryHistoryRepository),
}

impl HistoryRepository for HistoryBackendRepository {
    async fn load(&self) -> Result<Option<Vec<HistoryItem>>, CoreError> {
        match self {
            HistoryBackendRepository::File(repository) => repository.load().await,
            HistoryBackendRepository::Memory(repository) => repository.load().await,
        }
    }

    async fn store(&self, items: Vec<HistoryItem>) -> Result<(), CoreError> {
        match self {
            HistoryBackendRepository::File(repository) => repository.store(items).await,
            HistoryBackendRepository::Memory(repository) => repository.store(items).await,
        }
    }

    async fn remove(&self) -> Result<(), CoreError> {
        match self {
            HistoryBackendRepository::File(repository) => repository.remove().await,
            HistoryBackendRepository::Memory(repository) => repository.remove().await,
        }
    }
}

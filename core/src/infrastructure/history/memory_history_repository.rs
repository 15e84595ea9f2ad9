use tokio::sync::RwLock;

use crate::domain::{
    common::entities::app_errors::CoreError,
    history::{entities::HistoryItem, ports::HistoryRepository},
};

#[derive(Debug, Default)]
pub struct InMemoryHistoryRepository {
    entry: RwLock<Option<Vec<HistoryItem>>>,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryRepository for InMemoryHistoryRepository {
    async fn load(&self) -> Result<Option<Vec<HistoryItem>>, CoreError> {
        Ok(self.entry.read().await.clone())
    }

    async fn store(&self, items: Vec<HistoryItem>) -> Result<(), CoreError> {
        *self.entry.write().await = Some(items);
        Ok(())
    }

    async fn remove(&self) -> Result<(), CoreError> {
        *self.entry.write().await = None;
        Ok(())
    }
}

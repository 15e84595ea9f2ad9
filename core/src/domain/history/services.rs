use std::sync::Arc;

use tracing::{error, info};

use crate::domain::{
    history::{
        entities::HistoryItem,
        ports::{HistoryRepository, HistoryService},
    },
    label_analysis::entities::LabelAnalysis,
};

/// Name of the persisted history entry.
pub const HISTORY_KEY: &str = "label_slayer_history";

/// Number of most recent analyses kept.
pub const HISTORY_CAPACITY: usize = 50;

pub struct HistoryStore<HR>
where
    HR: HistoryRepository,
{
    repository: Arc<HR>,
}

impl<HR> HistoryStore<HR>
where
    HR: HistoryRepository,
{
    pub fn new(repository: Arc<HR>) -> Self {
        Self { repository }
    }

    async fn read(&self) -> Vec<HistoryItem> {
        match self.repository.load().await {
            Ok(items) => items.unwrap_or_default(),
            Err(e) => {
                error!("Failed to load history: {}", e);
                Vec::new()
            }
        }
    }
}

impl<HR> Clone for HistoryStore<HR>
where
    HR: HistoryRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<HR> HistoryService for HistoryStore<HR>
where
    HR: HistoryRepository,
{
    async fn save(&self, analysis: LabelAnalysis, photo_uri: Option<String>) -> Option<HistoryItem> {
        let item = HistoryItem::new(analysis, photo_uri);

        let mut items = self.read().await;
        items.insert(0, item.clone());
        items.truncate(HISTORY_CAPACITY);

        match self.repository.store(items).await {
            Ok(()) => {
                info!(history_id = %item.id, product = %item.analysis.product_name, "Saved analysis to history");
                Some(item)
            }
            Err(e) => {
                error!("Failed to save analysis to history: {}", e);
                None
            }
        }
    }

    async fn get_all(&self) -> Vec<HistoryItem> {
        self.read().await
    }

    async fn get_by_id(&self, id: String) -> Option<HistoryItem> {
        self.read().await.into_iter().find(|item| item.id == id)
    }

    async fn delete_by_id(&self, id: String) -> bool {
        let items = self.read().await;
        let before = items.len();
        let remaining: Vec<HistoryItem> = items.into_iter().filter(|item| item.id != id).collect();
        let removed = remaining.len() != before;

        if let Err(e) = self.repository.store(remaining).await {
            error!("Failed to delete history item: {}", e);
            return false;
        }

        removed
    }

    async fn clear(&self) {
        if let Err(e) = self.repository.remove().await {
            error!("Failed to clear history: {}", e);
        }
    }
}

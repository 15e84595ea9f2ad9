use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    history::entities::HistoryItem,
    label_analysis::entities::LabelAnalysis,
};

/// Storage medium holding the single serialized history entry.
#[cfg_attr(test, mockall::automock)]
pub trait HistoryRepository: Send + Sync {
    /// `Ok(None)` when the entry has never been written.
    fn load(&self) -> impl Future<Output = Result<Option<Vec<HistoryItem>>, CoreError>> + Send;

    fn store(&self, items: Vec<HistoryItem>) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn remove(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// History operations. Storage failures are logged, never returned.
pub trait HistoryService: Send + Sync {
    /// Returns the stored item, or `None` when the medium rejected the write.
    fn save(
        &self,
        analysis: LabelAnalysis,
        photo_uri: Option<String>,
    ) -> impl Future<Output = Option<HistoryItem>> + Send;

    fn get_all(&self) -> impl Future<Output = Vec<HistoryItem>> + Send;

    fn get_by_id(&self, id: String) -> impl Future<Output = Option<HistoryItem>> + Send;

    /// Returns whether any item carried the id.
    fn delete_by_id(&self, id: String) -> impl Future<Output = bool> + Send;

    fn clear(&self) -> impl Future<Output = ()> + Send;
}

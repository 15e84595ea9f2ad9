use label_slayer_core::domain::{
    common::now_millis,
    history::{HistoryItem, format_relative_time, product_emoji},
    label_analysis::entities::LabelAnalysis,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SaveHistoryRequest {
    pub analysis: LabelAnalysis,
    #[validate(length(max = 2048, message = "photo_uri must be at most 2048 characters"))]
    pub photo_uri: Option<String>,
}

/// History entry decorated for list and detail views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntryResponse {
    #[serde(flatten)]
    pub item: HistoryItem,
    pub relative_time: String,
    pub emoji: String,
}

impl HistoryEntryResponse {
    pub fn at(item: HistoryItem, now_ms: i64) -> Self {
        Self {
            relative_time: format_relative_time(item.timestamp, now_ms),
            emoji: product_emoji(&item.analysis.product_name).to_string(),
            item,
        }
    }
}

impl From<HistoryItem> for HistoryEntryResponse {
    fn from(item: HistoryItem) -> Self {
        Self::at(item, now_millis())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HistoryDeletedResponse {
    pub deleted: bool,
}

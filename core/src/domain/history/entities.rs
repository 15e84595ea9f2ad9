use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::{generate_uuid_v7, now_millis},
    label_analysis::entities::LabelAnalysis,
};

/// A persisted analysis with identity and capture time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: String,
    /// Epoch milliseconds.
    pub timestamp: i64,
    #[serde(flatten)]
    pub analysis: LabelAnalysis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_uri: Option<String>,
}

impl HistoryItem {
    pub fn new(analysis: LabelAnalysis, photo_uri: Option<String>) -> Self {
        Self {
            id: generate_uuid_v7().to_string(),
            timestamp: now_millis(),
            analysis,
            photo_uri,
        }
    }
}

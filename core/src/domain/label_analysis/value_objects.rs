use crate::domain::{
    history::entities::HistoryItem, image::entities::EncodedImage,
    label_analysis::entities::LabelAnalysis, product_lookup::entities::ProductCandidate,
};

/// Provider-neutral request handed to the model client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub system: String,
    pub instruction: String,
    pub image: Option<EncodedImage>,
}

#[derive(Debug, Clone)]
pub struct AnalyzeImageInput {
    pub image_uri: String,
    /// Stored with the history entry. Defaults to `image_uri` unless that is a data URI.
    pub photo_uri: Option<String>,
    pub save_to_history: bool,
}

#[derive(Debug, Clone)]
pub struct AnalyzeTextInput {
    pub product_name: String,
    pub ingredients: String,
    pub brand: Option<String>,
    pub save_to_history: bool,
}

#[derive(Debug, Clone)]
pub struct AnalyzeProductInput {
    pub candidate: ProductCandidate,
    pub save_to_history: bool,
}

#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub analysis: LabelAnalysis,
    /// Present when the analysis was persisted.
    pub history_item: Option<HistoryItem>,
}

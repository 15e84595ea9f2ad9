use axum::extract::State;
use label_slayer_core::domain::{
    insights::LabelInsights,
    label_analysis::{
        entities::LabelAnalysis,
        ports::LabelAnalysisService,
        value_objects::{AnalysisOutcome, AnalyzeImageInput},
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    analysis::validators::AnalyzeImageRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResponse {
    pub data: LabelAnalysis,
    pub insights: LabelInsights,
    /// Set when the analysis was saved to history.
    pub history_id: Option<String>,
}

impl From<AnalysisOutcome> for AnalysisResponse {
    fn from(outcome: AnalysisOutcome) -> Self {
        Self {
            insights: LabelInsights::from_analysis(&outcome.analysis),
            history_id: outcome.history_item.map(|item| item.id),
            data: outcome.analysis,
        }
    }
}

#[utoipa::path(
    post,
    path = "/image",
    tag = "analysis",
    summary = "Analyze a label image",
    description = "Encodes the referenced image, sends it to the model and returns the validated analysis",
    request_body = AnalyzeImageRequest,
    responses(
        (status = 200, body = AnalysisResponse),
        (status = 422, description = "Image could not be fetched or decoded", body = ApiErrorResponse),
        (status = 502, description = "Model endpoint rejected the request", body = ApiErrorResponse)
    )
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeImageRequest>,
) -> Result<Response<AnalysisResponse>, ApiError> {
    let outcome = state
        .service
        .analyze_image(AnalyzeImageInput {
            image_uri: payload.image_uri,
            photo_uri: payload.photo_uri,
            save_to_history: payload.save_to_history,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(outcome.into()))
}

use axum::Json;
use label_slayer_core::domain::{insights::LabelInsights, label_analysis::entities::LabelAnalysis};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::{
    api_error::{ApiError, ApiErrorResponse},
    response::Response,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InsightsResponse {
    pub data: LabelInsights,
}

#[utoipa::path(
    post,
    path = "",
    tag = "insights",
    summary = "Derive local insights for an analysis",
    description = "Runs the keyword heuristics over a validated analysis without calling the model",
    request_body = LabelAnalysis,
    responses(
        (status = 200, body = InsightsResponse),
        (status = 400, description = "Analysis breaks the record invariants", body = ApiErrorResponse)
    )
)]
pub async fn compute_insights(
    Json(analysis): Json<LabelAnalysis>,
) -> Result<Response<InsightsResponse>, ApiError> {
    analysis.ensure_valid()?;

    Ok(Response::OK(InsightsResponse {
        data: LabelInsights::from_analysis(&analysis),
    }))
}

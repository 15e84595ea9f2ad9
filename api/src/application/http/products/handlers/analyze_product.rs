use axum::extract::State;
use label_slayer_core::domain::label_analysis::{
    ports::LabelAnalysisService, value_objects::AnalyzeProductInput,
};

use crate::application::http::{
    analysis::handlers::analyze_image::AnalysisResponse,
    products::validators::AnalyzeProductRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "products",
    summary = "Analyze a product returned by search",
    request_body = AnalyzeProductRequest,
    responses(
        (status = 200, body = AnalysisResponse),
        (status = 400, description = "Product has no ingredient list")
    )
)]
pub async fn analyze_product(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeProductRequest>,
) -> Result<Response<AnalysisResponse>, ApiError> {
    let outcome = state
        .service
        .analyze_product(AnalyzeProductInput {
            candidate: payload.candidate(),
            save_to_history: payload.save_to_history,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(outcome.into()))
}

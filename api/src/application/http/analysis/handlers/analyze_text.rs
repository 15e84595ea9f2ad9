use axum::extract::State;
use label_slayer_core::domain::label_analysis::{
    ports::LabelAnalysisService, value_objects::AnalyzeTextInput,
};

use crate::application::http::{
    analysis::{handlers::analyze_image::AnalysisResponse, validators::AnalyzeTextRequest},
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
    path = "/text",
    tag = "analysis",
    summary = "Analyze a product from its ingredient list",
    request_body = AnalyzeTextRequest,
    responses(
        (status = 200, body = AnalysisResponse)
    )
)]
pub async fn analyze_text(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeTextRequest>,
) -> Result<Response<AnalysisResponse>, ApiError> {
    let outcome = state
        .service
        .analyze_text(AnalyzeTextInput {
            product_name: payload.product_name,
            ingredients: payload.ingredients,
            brand: payload.brand,
            save_to_history: payload.save_to_history,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(outcome.into()))
}

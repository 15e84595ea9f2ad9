use axum::extract::State;
use label_slayer_core::domain::history::ports::HistoryService;

use crate::application::http::{
    history::validators::{HistoryEntryResponse, SaveHistoryRequest},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "history",
    summary = "Save an analysis to history",
    request_body = SaveHistoryRequest,
    responses(
        (status = 201, body = HistoryEntryResponse),
        (status = 400, description = "Analysis breaks the record invariants", body = ApiErrorResponse),
        (status = 500, description = "History storage unavailable")
    )
)]
pub async fn save_history_item(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SaveHistoryRequest>,
) -> Result<Response<HistoryEntryResponse>, ApiError> {
    payload.analysis.ensure_valid()?;

    let item = state
        .service
        .history()
        .save(payload.analysis, payload.photo_uri)
        .await
        .ok_or_else(|| {
            ApiError::InternalServerError("History storage is unavailable".to_string())
        })?;

    Ok(Response::Created(item.into()))
}

use axum::extract::{Path, State};
use label_slayer_core::domain::history::ports::HistoryService;

use crate::application::http::{
    history::validators::HistoryDeletedResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "history",
    summary = "Delete one saved analysis",
    params(
        ("id" = String, Path, description = "History item id"),
    ),
    responses(
        (status = 200, body = HistoryDeletedResponse),
        (status = 404, description = "No history item with this id")
    )
)]
pub async fn delete_history_item(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<HistoryDeletedResponse>, ApiError> {
    if !state.service.history().delete_by_id(id).await {
        return Err(ApiError::NotFound("History item not found".to_string()));
    }

    Ok(Response::OK(HistoryDeletedResponse { deleted: true }))
}

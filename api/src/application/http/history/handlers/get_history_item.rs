use axum::extract::{Path, State};
use label_slayer_core::domain::history::ports::HistoryService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    history::validators::HistoryEntryResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HistoryItemResponse {
    pub data: HistoryEntryResponse,
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "history",
    summary = "Get one saved analysis",
    params(
        ("id" = String, Path, description = "History item id"),
    ),
    responses(
        (status = 200, body = HistoryItemResponse),
        (status = 404, description = "No history item with this id")
    )
)]
pub async fn get_history_item(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<HistoryItemResponse>, ApiError> {
    let item = state
        .service
        .history()
        .get_by_id(id)
        .await
        .ok_or_else(|| ApiError::NotFound("History item not found".to_string()))?;

    Ok(Response::OK(HistoryItemResponse { data: item.into() }))
}

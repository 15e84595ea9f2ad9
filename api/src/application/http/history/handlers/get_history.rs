use axum::extract::State;
use label_slayer_core::domain::{common::now_millis, history::ports::HistoryService};
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
pub struct HistoryListResponse {
    pub data: Vec<HistoryEntryResponse>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "history",
    summary = "List saved analyses, most recent first",
    responses(
        (status = 200, body = HistoryListResponse)
    )
)]
pub async fn get_history(
    State(state): State<AppState>,
) -> Result<Response<HistoryListResponse>, ApiError> {
    let now = now_millis();
    let items = state.service.history().get_all().await;

    Ok(Response::OK(HistoryListResponse {
        data: items
            .into_iter()
            .map(|item| HistoryEntryResponse::at(item, now))
            .collect(),
    }))
}

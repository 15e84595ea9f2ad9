use axum::extract::State;
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
    path = "",
    tag = "history",
    summary = "Delete every saved analysis",
    responses(
        (status = 200, body = HistoryDeletedResponse)
    )
)]
pub async fn clear_history(
    State(state): State<AppState>,
) -> Result<Response<HistoryDeletedResponse>, ApiError> {
    state.service.history().clear().await;
    Ok(Response::OK(HistoryDeletedResponse { deleted: true }))
}

use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    clear_history::{__path_clear_history, clear_history},
    delete_history_item::{__path_delete_history_item, delete_history_item},
    get_history::{__path_get_history, get_history},
    get_history_item::{__path_get_history_item, get_history_item},
    save_history_item::{__path_save_history_item, save_history_item},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    get_history,
    save_history_item,
    clear_history,
    get_history_item,
    delete_history_item
))]
pub struct HistoryApiDoc;

pub fn history_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/history", state.args.server.root_path),
            get(get_history).post(save_history_item).delete(clear_history),
        )
        .route(
            &format!("{}/history/{{id}}", state.args.server.root_path),
            get(get_history_item).delete(delete_history_item),
        )
}

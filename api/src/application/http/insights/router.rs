use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::compute_insights::{__path_compute_insights, compute_insights};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(compute_insights))]
pub struct InsightsApiDoc;

pub fn insights_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/insights", state.args.server.root_path),
        post(compute_insights),
    )
}

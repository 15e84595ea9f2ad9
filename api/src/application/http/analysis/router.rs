use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    analyze_image::{__path_analyze_image, analyze_image},
    analyze_text::{__path_analyze_text, analyze_text},
    upload_image::{__path_upload_image, MAX_IMAGE_SIZE, upload_image},
};
use crate::application::http::server::app_state::AppState;

// Room for multipart boundaries and the small text fields
const UPLOAD_BODY_LIMIT: usize = MAX_IMAGE_SIZE + 64 * 1024;
// Inline data URIs grow by a third once base64 encoded
const DATA_URI_BODY_LIMIT: usize = MAX_IMAGE_SIZE / 3 * 4 + 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(analyze_image, upload_image, analyze_text))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/analysis/image", state.args.server.root_path),
            post(analyze_image).layer(DefaultBodyLimit::max(DATA_URI_BODY_LIMIT)),
        )
        .route(
            &format!("{}/analysis/image/upload", state.args.server.root_path),
            post(upload_image).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route(
            &format!("{}/analysis/text", state.args.server.root_path),
            post(analyze_text),
        )
}

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    analyze_product::{__path_analyze_product, analyze_product},
    search_products::{__path_search_products, search_products},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(search_products, analyze_product))]
pub struct ProductsApiDoc;

pub fn products_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/products/search", state.args.server.root_path),
            get(search_products),
        )
        .route(
            &format!("{}/products/analyze", state.args.server.root_path),
            post(analyze_product),
        )
}

use axum::extract::{Query, State};
use label_slayer_core::domain::product_lookup::{
    entities::ProductCandidate, ports::ProductLookupService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    products::validators::SearchProductsParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchProductsResponse {
    pub data: Vec<ProductCandidate>,
}

#[utoipa::path(
    get,
    path = "/search",
    tag = "products",
    summary = "Search the food database",
    params(SearchProductsParams),
    responses(
        (status = 200, body = SearchProductsResponse),
        (status = 400, description = "Blank query"),
        (status = 502, description = "Food database unavailable")
    )
)]
pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchProductsParams>,
) -> Result<Response<SearchProductsResponse>, ApiError> {
    params
        .validate()
        .map_err(|errors| ApiError::BadRequest(errors.to_string()))?;

    let products = state
        .service
        .search_products(params.q)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchProductsResponse { data: products }))
}

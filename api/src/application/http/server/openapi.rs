use utoipa::OpenApi;

use crate::application::http::{
    analysis::router::AnalysisApiDoc, health::HealthApiDoc, history::router::HistoryApiDoc,
    insights::router::InsightsApiDoc, products::router::ProductsApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Label Slayer API",
        description = "Packaged food label analysis, history and ingredient insights"
    ),
    nest(
        (path = "/analysis", api = AnalysisApiDoc),
        (path = "/products", api = ProductsApiDoc),
        (path = "/insights", api = InsightsApiDoc),
        (path = "/history", api = HistoryApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

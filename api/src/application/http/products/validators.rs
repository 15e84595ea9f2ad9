use label_slayer_core::domain::product_lookup::entities::ProductCandidate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::http::analysis::validators::default_save_to_history;

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema, Validate)]
#[into_params(parameter_in = Query)]
pub struct SearchProductsParams {
    /// Free-text product query.
    #[schema(example = "nutella")]
    #[validate(length(min = 1, max = 200, message = "q must be between 1 and 200 characters"))]
    pub q: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeProductRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "product_name must be between 1 and 200 characters"
    ))]
    pub product_name: String,
    pub brand: Option<String>,
    #[validate(length(max = 5000, message = "ingredients_text must be at most 5000 characters"))]
    pub ingredients_text: Option<String>,
    pub image_url: Option<String>,
    #[serde(default = "default_save_to_history")]
    pub save_to_history: bool,
}

impl AnalyzeProductRequest {
    pub fn candidate(&self) -> ProductCandidate {
        ProductCandidate {
            product_name: self.product_name.clone(),
            brand: self.brand.clone(),
            ingredients_text: self.ingredients_text.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

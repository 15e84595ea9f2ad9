use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown Product";
pub const MAX_SCORE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IngredientStatus {
    Good,
    Moderate,
    Bad,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientAnalysis {
    pub name: String,
    pub status: IngredientStatus,
    #[serde(default)]
    pub reason: String,
}

/// Validated verdict for one product, as returned by the remote model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LabelAnalysis {
    pub product_name: String,
    /// Health score, 0 to 100.
    pub score: u8,
    /// Kept in the order the model listed them.
    pub ingredients: Vec<IngredientAnalysis>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub roast_comment: String,
}

impl LabelAnalysis {
    /// Substitute record for an unreadable label analysis.
    pub fn label_fallback() -> Self {
        Self {
            product_name: UNKNOWN_PRODUCT_NAME.to_string(),
            score: 0,
            ingredients: Vec::new(),
            summary: "Unable to analyze this label. The AI response was not valid JSON.".to_string(),
            roast_comment: "Label so sketchy even the AI lost its mind. Try another photo."
                .to_string(),
        }
    }

    /// Substitute record for an unreadable product analysis.
    pub fn product_fallback(product_name: &str) -> Self {
        let product_name = product_name.trim();

        Self {
            product_name: if product_name.is_empty() {
                UNKNOWN_PRODUCT_NAME.to_string()
            } else {
                product_name.to_string()
            },
            score: 0,
            ingredients: Vec::new(),
            summary: "Unable to analyze this product properly.".to_string(),
            roast_comment: "Analysis failed harder than this product's nutrition facts."
                .to_string(),
        }
    }

    /// Rejects client-supplied records that the model parser would never produce.
    pub fn ensure_valid(&self) -> Result<(), CoreError> {
        if self.product_name.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "productName must not be empty".to_string(),
            ));
        }

        if self.score > MAX_SCORE {
            return Err(CoreError::InvalidInput(format!(
                "score must be between 0 and {}, got {}",
                MAX_SCORE, self.score
            )));
        }

        if self.ingredients.iter().any(|i| i.name.trim().is_empty()) {
            return Err(CoreError::InvalidInput(
                "ingredient names must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn count_with_status(&self, status: IngredientStatus) -> usize {
        self.ingredients
            .iter()
            .filter(|ingredient| ingredient.status == status)
            .count()
    }
}

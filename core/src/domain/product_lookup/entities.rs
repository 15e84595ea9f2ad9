use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product found in the food database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductCandidate {
    pub product_name: String,
    pub brand: Option<String>,
    pub ingredients_text: Option<String>,
    pub image_url: Option<String>,
}

pub const UNKNOWN_BRAND: &str = "Unknown Brand";

impl ProductCandidate {
    /// Listed brand, or a placeholder so the analysis prompt always names one.
    pub fn brand_or_unknown(&self) -> &str {
        self.brand
            .as_deref()
            .map(str::trim)
            .filter(|brand| !brand.is_empty())
            .unwrap_or(UNKNOWN_BRAND)
    }


    /// Ingredient text when present and non-blank.
    pub fn ingredients(&self) -> Option<&str> {
        self.ingredients_text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(brand: Option<&str>) -> ProductCandidate {
        ProductCandidate {
            product_name: "Cocoa Bar".to_string(),
            brand: brand.map(str::to_string),
            ingredients_text: None,
            image_url: None,
        }
    }

    #[test]
    fn test_brand_falls_back_to_unknown() {
        assert_eq!(candidate(None).brand_or_unknown(), UNKNOWN_BRAND);
        assert_eq!(candidate(Some("  ")).brand_or_unknown(), UNKNOWN_BRAND);
        assert_eq!(candidate(Some(" Acme ")).brand_or_unknown(), "Acme");
    }
}

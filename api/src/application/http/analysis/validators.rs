use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub(crate) fn default_save_to_history() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeImageRequest {
    /// `data:` URI, `http(s)://` URL, or a `file://` URL or path below the server image root.
    #[validate(length(min = 1, message = "image_uri must not be empty"))]
    pub image_uri: String,
    #[validate(length(max = 2048, message = "photo_uri must be at most 2048 characters"))]
    pub photo_uri: Option<String>,
    #[serde(default = "default_save_to_history")]
    pub save_to_history: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeTextRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "product_name must be between 1 and 200 characters"
    ))]
    pub product_name: String,
    #[validate(length(
        min = 1,
        max = 5000,
        message = "ingredients must be between 1 and 5000 characters"
    ))]
    pub ingredients: String,
    #[validate(length(max = 200, message = "brand must be at most 200 characters"))]
    pub brand: Option<String>,
    #[serde(default = "default_save_to_history")]
    pub save_to_history: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_to_history_defaults_to_true() {
        let request: AnalyzeTextRequest =
            serde_json::from_str(r#"{"product_name":"Soda","ingredients":"water"}"#).unwrap();
        assert!(request.save_to_history);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_fields_fail_validation() {
        let request = AnalyzeTextRequest {
            product_name: String::new(),
            ingredients: "water".to_string(),
            brand: None,
            save_to_history: false,
        };
        assert!(request.validate().is_err());

        let request = AnalyzeImageRequest {
            image_uri: String::new(),
            photo_uri: None,
            save_to_history: true,
        };
        assert!(request.validate().is_err());
    }
}

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, warn};

use crate::domain::label_analysis::entities::{IngredientAnalysis, LabelAnalysis};

#[derive(Debug, Error)]
enum Rejection {
    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response is not a JSON object")]
    NotAnObject,

    #[error("productName is missing or empty")]
    MissingProductName,

    #[error("score is not a number")]
    InvalidScore,

    #[error("ingredients is not an array")]
    InvalidIngredients,

    #[error("ingredient {index} is malformed: {source}")]
    Ingredient {
        index: usize,
        source: serde_json::Error,
    },
}

/// Removes markdown code fence markers the model may have added.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parses completion text into a `LabelAnalysis`, or the label fallback record.
pub fn parse_label_analysis(raw: &str) -> LabelAnalysis {
    parse_label_analysis_or(raw, LabelAnalysis::label_fallback())
}

pub fn parse_label_analysis_or(raw: &str, fallback: LabelAnalysis) -> LabelAnalysis {
    match validate(&strip_code_fences(raw)) {
        Ok(analysis) => analysis,
        Err(e) => {
            error!(error = %e, raw_response = %raw, "Rejected model response");
            fallback
        }
    }
}

fn validate(sanitized: &str) -> Result<LabelAnalysis, Rejection> {
    let value: Value = serde_json::from_str(sanitized)?;
    let object = value.as_object().ok_or(Rejection::NotAnObject)?;

    let product_name = object
        .get("productName")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .ok_or(Rejection::MissingProductName)?;

    let score = object
        .get("score")
        .and_then(Value::as_f64)
        .ok_or(Rejection::InvalidScore)?;

    let ingredients = object
        .get("ingredients")
        .and_then(Value::as_array)
        .ok_or(Rejection::InvalidIngredients)?
        .iter()
        .enumerate()
        .map(|(index, item)| {
            IngredientAnalysis::deserialize(item)
                .map_err(|source| Rejection::Ingredient { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let text_field = |key: &str| {
        object
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    Ok(LabelAnalysis {
        product_name: product_name.to_string(),
        score: normalize_score(score),
        ingredients,
        summary: text_field("summary"),
        roast_comment: text_field("roastComment"),
    })
}

/// Rounds to the nearest integer and clamps into 0..=100.
fn normalize_score(score: f64) -> u8 {
    let rounded = score.round();
    if !(0.0..=100.0).contains(&rounded) {
        warn!(score, "Model score outside 0..=100, clamping");
    }
    rounded.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::label_analysis::entities::{IngredientStatus, UNKNOWN_PRODUCT_NAME};

    const VALID: &str = r#"{
        "productName": "Rainbow Gummies",
        "score": 12,
        "ingredients": [
            {"name": "Corn Syrup", "status": "bad", "reason": "Liquid sugar."},
            {"name": "Pectin", "status": "moderate", "reason": "Fruit fiber."}
        ],
        "summary": "Candy with extra steps.",
        "roastComment": "Car wax for your molars."
    }"#;

    #[test]
    fn test_parse_valid_response() {
        let analysis = parse_label_analysis(VALID);

        assert_eq!(analysis.product_name, "Rainbow Gummies");
        assert_eq!(analysis.score, 12);
        assert_eq!(analysis.ingredients.len(), 2);
        assert_eq!(analysis.ingredients[0].name, "Corn Syrup");
        assert_eq!(analysis.ingredients[0].status, IngredientStatus::Bad);
        assert_eq!(analysis.ingredients[1].status, IngredientStatus::Moderate);
        assert_eq!(analysis.roast_comment, "Car wax for your molars.");
    }

    #[test]
    fn test_parse_fenced_response() {
        let fenced = format!("```json\n{}\n```", VALID);
        assert_eq!(parse_label_analysis(&fenced), parse_label_analysis(VALID));

        let bare_fence = format!("```\n{}\n```", VALID);
        assert_eq!(parse_label_analysis(&bare_fence).product_name, "Rainbow Gummies");
    }

    #[test]
    fn test_parse_empty_ingredient_list() {
        let analysis = parse_label_analysis(
            r#"{"productName":"Spring Water","score":95,"ingredients":[],"summary":"","roastComment":""}"#,
        );
        assert_eq!(analysis.product_name, "Spring Water");
        assert!(analysis.ingredients.is_empty());
    }

    #[test]
    fn test_parse_missing_text_fields_default_to_empty() {
        let analysis =
            parse_label_analysis(r#"{"productName":"Oats","score":80,"ingredients":[]}"#);
        assert_eq!(analysis.summary, "");
        assert_eq!(analysis.roast_comment, "");
    }

    #[test]
    fn test_parse_prose_returns_fallback() {
        let analysis = parse_label_analysis("I'm sorry, I can't read this label.");
        assert_eq!(analysis, LabelAnalysis::label_fallback());
        assert_eq!(analysis.product_name, UNKNOWN_PRODUCT_NAME);
        assert_eq!(
            analysis.summary,
            "Unable to analyze this label. The AI response was not valid JSON."
        );
    }

    #[test]
    fn test_parse_empty_text_returns_fallback() {
        assert_eq!(parse_label_analysis(""), LabelAnalysis::label_fallback());
    }

    #[test]
    fn test_parse_rejects_invalid_shapes() {
        let cases = [
            r#"{"productName":"","score":10,"ingredients":[]}"#,
            r#"{"productName":"X","score":"10","ingredients":[]}"#,
            r#"{"productName":"X","score":10,"ingredients":{}}"#,
            r#"{"productName":"X","score":10,"ingredients":[{"name":"Salt","status":"awful","reason":""}]}"#,
            r#"[1, 2, 3]"#,
        ];

        for case in cases {
            assert_eq!(
                parse_label_analysis(case),
                LabelAnalysis::label_fallback(),
                "expected fallback for {}",
                case
            );
        }
    }

    #[test]
    fn test_parse_rounds_and_clamps_score() {
        let rounded =
            parse_label_analysis(r#"{"productName":"X","score":41.6,"ingredients":[]}"#);
        assert_eq!(rounded.score, 42);

        let high = parse_label_analysis(r#"{"productName":"X","score":150,"ingredients":[]}"#);
        assert_eq!(high.score, 100);

        let low = parse_label_analysis(r#"{"productName":"X","score":-3,"ingredients":[]}"#);
        assert_eq!(low.score, 0);
    }

    #[test]
    fn test_parse_with_product_fallback() {
        let analysis =
            parse_label_analysis_or("not json", LabelAnalysis::product_fallback("Cola Zero"));
        assert_eq!(analysis.product_name, "Cola Zero");
        assert_eq!(analysis.summary, "Unable to analyze this product properly.");
    }
}

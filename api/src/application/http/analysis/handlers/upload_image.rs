use axum::extract::{Multipart, State};
use base64::{Engine as _, engine::general_purpose};
use label_slayer_core::domain::{
    image::value_objects::normalize_content_type,
    label_analysis::{ports::LabelAnalysisService, value_objects::AnalyzeImageInput},
};

use crate::application::http::{
    analysis::handlers::analyze_image::AnalysisResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

fn parse_flag(value: &str) -> Result<bool, ApiError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ApiError::BadRequest(format!(
            "Invalid save_to_history value: {}",
            other
        ))),
    }
}

#[utoipa::path(
    post,
    path = "/image/upload",
    tag = "analysis",
    summary = "Analyze an uploaded label photo",
    description = "Multipart form with an `image` file field and optional `photo_uri` and `save_to_history` fields",
    responses(
        (status = 200, body = AnalysisResponse)
    )
)]
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AnalysisResponse>, ApiError> {
    let mut image: Option<(Vec<u8>, Option<String>)> = None;
    let mut photo_uri: Option<String> = None;
    let mut save_to_history = true;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let content_type = field.content_type().and_then(normalize_content_type);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                image = Some((data.to_vec(), content_type));
            }
            "photo_uri" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read photo_uri: {}", e))
                })?;
                photo_uri = Some(value).filter(|v| !v.trim().is_empty());
            }
            "save_to_history" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read save_to_history: {}", e))
                })?;
                save_to_history = parse_flag(&value)?;
            }
            _ => {}
        }
    }

    let (bytes, content_type) =
        image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    if bytes.is_empty() {
        return Err(ApiError::BadRequest("Image field is empty".to_string()));
    }

    let image_uri = format!(
        "data:{};base64,{}",
        content_type.as_deref().unwrap_or("image/jpeg"),
        general_purpose::STANDARD.encode(&bytes)
    );

    let outcome = state
        .service
        .analyze_image(AnalyzeImageInput {
            image_uri,
            photo_uri,
            save_to_history,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(outcome.into()))
}

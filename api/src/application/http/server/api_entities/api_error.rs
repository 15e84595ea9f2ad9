use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use label_slayer_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    ImageProcessing(String),

    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    InternalServerError(String),
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "E_NOT_FOUND"),
            ApiError::ImageProcessing(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "E_IMAGE_PROCESSING")
            }
            ApiError::Configuration(_) => (StatusCode::INTERNAL_SERVER_ERROR, "E_CONFIGURATION"),
            ApiError::BadGateway(_) => (StatusCode::BAD_GATEWAY, "E_UPSTREAM"),
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            CoreError::InvalidInput(message) => ApiError::BadRequest(message),
            CoreError::ConfigurationError(message) => ApiError::Configuration(message),
            CoreError::FetchError(message) | CoreError::FormatError(message) => {
                ApiError::ImageProcessing(format!("Failed to process image: {}", message))
            }
            CoreError::UpstreamError(message) => ApiError::BadGateway(message),
            CoreError::StorageError(message) => ApiError::InternalServerError(message),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.parts();

        if status.is_server_error() {
            tracing::error!(code, "{}", self);
        }

        (
            status,
            Json(ApiErrorResponse {
                code: code.to_string(),
                status: status.as_u16(),
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// JSON extractor that runs `validator` rules before reaching the handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::BadRequest(errors.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_http_codes() {
        let cases = [
            (
                CoreError::ConfigurationError("missing key".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "E_CONFIGURATION",
            ),
            (
                CoreError::FetchError("404".to_string()),
                StatusCode::UNPROCESSABLE_ENTITY,
                "E_IMAGE_PROCESSING",
            ),
            (
                CoreError::FormatError("bad base64".to_string()),
                StatusCode::UNPROCESSABLE_ENTITY,
                "E_IMAGE_PROCESSING",
            ),
            (
                CoreError::UpstreamError("quota".to_string()),
                StatusCode::BAD_GATEWAY,
                "E_UPSTREAM",
            ),
            (
                CoreError::InvalidInput("blank".to_string()),
                StatusCode::BAD_REQUEST,
                "E_BAD_REQUEST",
            ),
            (CoreError::NotFound, StatusCode::NOT_FOUND, "E_NOT_FOUND"),
        ];

        for (error, status, code) in cases {
            assert_eq!(ApiError::from(error).parts(), (status, code));
        }
    }

    #[test]
    fn test_upstream_message_is_passed_through() {
        let error = ApiError::from(CoreError::UpstreamError(
            "You exceeded your current quota".to_string(),
        ));
        assert_eq!(error.to_string(), "You exceeded your current quota");
    }
}

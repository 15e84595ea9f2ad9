use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";

/// Base64 image payload ready to embed in a model request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EncodedImage {
    pub mime_type: String,
    /// Standard padded base64, without any `data:` prefix.
    pub data: String,
}

impl EncodedImage {
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Raw bytes of a dereferenced image resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedImage {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

use std::path::{Path, PathBuf};

use url::Url;

use crate::domain::common::entities::app_errors::CoreError;

/// Parsed form of an image locator string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLocator {
    /// Inline `data:` URI. `payload` is everything after the first comma.
    Data {
        mime_type: Option<String>,
        is_base64: bool,
        payload: String,
    },
    Remote(Url),
    File(PathBuf),
}

impl ImageLocator {
    /// Accepts `data:` URIs, `http(s)://` and `file://` URLs, and bare paths.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(CoreError::FetchError("image locator is empty".to_string()));
        }

        if let Some(rest) = strip_prefix_ignore_case(raw, "data:") {
            return Self::parse_data_uri(rest);
        }

        match Url::parse(raw) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(ImageLocator::Remote(url)),
                "file" => url.to_file_path().map(ImageLocator::File).map_err(|_| {
                    CoreError::FetchError(format!("invalid file URL: {}", raw))
                }),
                // Windows drive letters parse as one-letter schemes
                scheme if scheme.len() == 1 => Ok(ImageLocator::File(PathBuf::from(raw))),
                scheme => Err(CoreError::FetchError(format!(
                    "unsupported image locator scheme: {}",
                    scheme
                ))),
            },
            Err(_) => Ok(ImageLocator::File(PathBuf::from(raw))),
        }
    }

    fn parse_data_uri(rest: &str) -> Result<Self, CoreError> {
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| CoreError::FormatError("Invalid data URL format".to_string()))?;

        if payload.trim().is_empty() {
            return Err(CoreError::FormatError("No base64 data found".to_string()));
        }

        let mut params = header.split(';');
        let mime_type = params
            .next()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(|m| m.to_ascii_lowercase());
        let is_base64 = params.any(|p| p.trim().eq_ignore_ascii_case("base64"));

        Ok(ImageLocator::Data {
            mime_type,
            is_base64,
            payload: payload.to_string(),
        })
    }

    pub fn scheme(&self) -> &'static str {
        match self {
            ImageLocator::Data { .. } => "data",
            ImageLocator::Remote(url) if url.scheme() == "https" => "https",
            ImageLocator::Remote(_) => "http",
            ImageLocator::File(_) => "file",
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, ImageLocator::Data { .. })
    }

    /// MIME type implied by the locator itself, if any.
    pub fn guessed_mime_type(&self) -> Option<String> {
        match self {
            ImageLocator::Data { mime_type, .. } => mime_type.clone(),
            ImageLocator::Remote(url) => mime_type_from_path(Path::new(url.path())).map(str::to_string),
            ImageLocator::File(path) => mime_type_from_path(path).map(str::to_string),
        }
    }
}

fn strip_prefix_ignore_case<'a>(raw: &'a str, prefix: &str) -> Option<&'a str> {
    let head = raw.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &raw[prefix.len()..])
}

pub fn mime_type_from_path(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "heic" => Some("image/heic"),
        "heif" => Some("image/heif"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}

/// Keeps only `image/*` content types, stripped of parameters.
pub fn normalize_content_type(content_type: &str) -> Option<String> {
    let essence = content_type.split(';').next()?.trim().to_ascii_lowercase();
    essence.starts_with("image/").then_some(essence)
}

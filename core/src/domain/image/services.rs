use base64::{Engine as _, engine::general_purpose};
use tracing::debug;

use crate::domain::{
    common::entities::app_errors::CoreError,
    image::{
        entities::{DEFAULT_IMAGE_MIME_TYPE, EncodedImage},
        ports::ImageFetcher,
        value_objects::{ImageLocator, normalize_content_type},
    },
};

/// Turns an image locator into a standard base64 payload without prefix.
pub async fn encode_image<F>(fetcher: &F, locator: &str) -> Result<EncodedImage, CoreError>
where
    F: ImageFetcher,
{
    let locator = ImageLocator::parse(locator)?;

    if let ImageLocator::Data {
        mime_type,
        is_base64,
        payload,
    } = locator
    {
        let bytes = decode_data_payload(&payload, is_base64)?;
        debug!(bytes = bytes.len(), "Decoded inline image");

        return Ok(EncodedImage {
            mime_type: mime_type.unwrap_or_else(|| DEFAULT_IMAGE_MIME_TYPE.to_string()),
            data: general_purpose::STANDARD.encode(&bytes),
        });
    }

    let guessed_mime_type = locator.guessed_mime_type();
    let scheme = locator.scheme();
    let fetched = fetcher.fetch(locator).await?;

    if fetched.bytes.is_empty() {
        return Err(CoreError::FormatError("image resource is empty".to_string()));
    }

    let mime_type = fetched
        .content_type
        .as_deref()
        .and_then(normalize_content_type)
        .or(guessed_mime_type)
        .unwrap_or_else(|| DEFAULT_IMAGE_MIME_TYPE.to_string());

    debug!(
        scheme,
        bytes = fetched.bytes.len(),
        mime_type = %mime_type,
        "Fetched image"
    );

    Ok(EncodedImage {
        mime_type,
        data: general_purpose::STANDARD.encode(&fetched.bytes),
    })
}

fn decode_data_payload(payload: &str, is_base64: bool) -> Result<Vec<u8>, CoreError> {
    let bytes = if is_base64 {
        let compact: String = payload
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        general_purpose::STANDARD
            .decode(compact.as_bytes())
            .map_err(|e| CoreError::FormatError(format!("invalid base64 payload: {}", e)))?
    } else {
        urlencoding::decode_binary(payload.as_bytes()).into_owned()
    };

    if bytes.is_empty() {
        return Err(CoreError::FormatError("No base64 data found".to_string()));
    }

    Ok(bytes)
}

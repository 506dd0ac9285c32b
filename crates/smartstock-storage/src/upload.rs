//! Decoding of base64 image uploads.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;

use smartstock_core::error::{AppError, ErrorKind};
use smartstock_core::result::AppResult;

/// Extension used when the bytes match no known image format.
pub const FALLBACK_EXTENSION: &str = "jpg";

/// A decoded upload ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Raw image bytes.
    pub content: Bytes,
    /// File extension derived from the content, without the dot.
    pub extension: &'static str,
}

/// Decode a base64 payload, accepting an optional `data:<mime>;base64,`
/// prefix, and detect the file extension from the image bytes.
pub fn decode_image(payload: &str) -> AppResult<DecodedImage> {
    let encoded = match payload.split_once(";base64,") {
        Some((prefix, data)) if prefix.starts_with("data:") => data,
        _ => payload,
    };
    let cleaned: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let content = BASE64.decode(cleaned.as_bytes()).map_err(|e| {
        AppError::with_source(
            ErrorKind::Validation,
            format!("Image is not valid base64: {e}"),
            e,
        )
    })?;
    if content.is_empty() {
        return Err(AppError::validation("Image payload is empty"));
    }

    let extension = image::guess_format(&content)
        .ok()
        .and_then(|format| format.extensions_str().first().copied())
        .unwrap_or(FALLBACK_EXTENSION);

    Ok(DecodedImage {
        content: Bytes::from(content),
        extension,
    })
}

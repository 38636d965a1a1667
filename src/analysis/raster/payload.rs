//! Self-describing image payload handling.
//!
//! The capture UI exchanges images either as raw encoded bytes or as
//! `data:<mime>;base64,<data>` URIs. Incoming payloads are unwrapped here
//! before decoding; outgoing artifacts can be wrapped the same way for
//! collaborators that expect a self-describing string.

use std::borrow::Cow;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::analysis::common::error::{Result, AnalysisError};

/// Extracts the encoded image bytes from a payload.
///
/// A payload starting with `data:` is treated as a base64 data URI and
/// decoded; anything else is passed through as-is.
pub fn image_bytes(payload: &[u8]) -> Result<Cow<'_, [u8]>> {
    if !payload.starts_with(b"data:") {
        return Ok(Cow::Borrowed(payload));
    }

    let text = std::str::from_utf8(payload)
        .map_err(|e| AnalysisError::DecodeError(format!("data URI is not valid UTF-8: {}", e)))?;

    let encoded = text
        .split_once(',')
        .map(|(_, rest)| rest)
        .ok_or_else(|| AnalysisError::DecodeError("data URI has no comma separator".to_string()))?;

    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| AnalysisError::DecodeError(format!("invalid base64 payload: {}", e)))?;

    Ok(Cow::Owned(bytes))
}

/// Wraps encoded image bytes as a `data:` URI with the given MIME type.
pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_bytes_pass_through() {
        let payload = [0x89u8, b'P', b'N', b'G'];
        let bytes = image_bytes(&payload).unwrap();
        assert_eq!(bytes.as_ref(), &payload);
    }

    #[test]
    fn data_uri_round_trip() {
        let original = b"not really a png";
        let uri = to_data_uri("image/png", original);
        assert!(uri.starts_with("data:image/png;base64,"));

        let bytes = image_bytes(uri.as_bytes()).unwrap();
        assert_eq!(bytes.as_ref(), original);
    }

    #[test]
    fn data_uri_without_comma_is_rejected() {
        let result = image_bytes(b"data:image/png;base64");
        assert!(matches!(result, Err(AnalysisError::DecodeError(_))));
    }

    #[test]
    fn data_uri_with_bad_base64_is_rejected() {
        let result = image_bytes(b"data:image/png;base64,@@@@");
        assert!(matches!(result, Err(AnalysisError::DecodeError(_))));
    }
}

//! # Document codec
//!
//! Documents travel as base64 strings inside JSON. The portal only handles PDFs,
//! so the MIME type is fixed.
//!
//! - [`encode`] turns uploaded bytes into the wire payload.
//! - [`decode`] turns a payload back into bytes for download.
//! - [`data_url`] builds the `data:` URL the inline viewer embeds.
//!
//! Browser file readers hand back `data:...;base64,<payload>` strings; both
//! [`decode`] and [`strip_data_url`] accept that form too.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::ApiResult;

pub const PDF_MIME: &str = "application/pdf";

pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn decode(payload: &str) -> ApiResult<Vec<u8>> {
    let cleaned: String = strip_data_url(payload)
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    Ok(STANDARD.decode(cleaned)?)
}

/// Drop a leading `data:<mime>;base64,` prefix, if any.
pub fn strip_data_url(payload: &str) -> &str {
    if payload.starts_with("data:") {
        if let Some((_, rest)) = payload.split_once(',') {
            return rest;
        }
    }
    payload
}

/// Inline viewer source for a payload.
pub fn data_url(payload: &str) -> String {
    format!("data:{PDF_MIME};base64,{}", strip_data_url(payload))
}

/// Download name for a document of the given type.
pub fn file_name(kind: &str) -> String {
    let stem = kind.trim();
    if stem.is_empty() {
        "document.pdf".to_string()
    } else {
        format!("{stem}.pdf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_survive_upload_and_download() {
        let bytes: Vec<u8> = b"%PDF-1.4\n".iter().copied().chain(0u8..=255).collect();
        let payload = encode(&bytes);
        assert_eq!(decode(&payload).unwrap(), bytes);
    }

    #[test]
    fn test_decode_accepts_reader_output() {
        let payload = format!("data:application/pdf;base64,{}", encode(b"hello"));
        assert_eq!(decode(&payload).unwrap(), b"hello");
        assert_eq!(data_url(&payload), payload);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode("not base64!!").unwrap_err();
        assert!(err.user_message().contains("corrupted"));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("Aadhar"), "Aadhar.pdf");
        assert_eq!(file_name(" "), "document.pdf");
    }
}

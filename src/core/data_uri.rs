//! Images travel inside the portfolio record as base64 data URIs, the same
//! representation the original browser build produced from file uploads.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

pub fn encode(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Raw bytes of a base64 data URI, or `None` for anything else.
pub fn decode(uri: &str) -> Option<Vec<u8>> {
    let rest = uri.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    if !meta.ends_with(";base64") {
        return None;
    }
    STANDARD.decode(payload.trim()).ok()
}

pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_roundtrip() {
        let bytes = b"\x89PNG\r\n\x1a\n";
        let uri = encode("image/png", bytes);
        assert!(uri.starts_with("data:image/png;base64,"));
        assert_eq!(decode(&uri).unwrap(), bytes);
    }

    #[test]
    fn non_base64_uri_is_rejected() {
        assert_eq!(decode("data:text/plain,hello"), None);
        assert_eq!(decode("https://example.com/a.png"), None);
    }

    #[test]
    fn mime_is_guessed_from_extension_case_insensitively() {
        assert_eq!(mime_for_path(Path::new("photo.PNG")), "image/png");
        assert_eq!(mime_for_path(Path::new("photo.jpeg")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("photo")), "application/octet-stream");
    }
}

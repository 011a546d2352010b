//! Character encoding sniffing for raw page bytes.
//!
//! Order of precedence: byte-order mark, then a charset declared in a
//! `<meta>` tag within the first 1024 bytes (either `charset=` form), then
//! UTF-8. Decoding is lossy; malformed sequences become U+FFFD.

use encoding_rs::{Encoding, UTF_8};

use crate::patterns::CHARSET_META;

const SNIFF_LEN: usize = 1024;

/// Detect the character encoding of an HTML byte stream.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    CHARSET_META
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to a UTF-8 string using the detected encoding.
///
/// ```
/// use page_capture::encoding::decode_html;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><p>Caf\xE9</p>";
/// assert!(decode_html(html).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let (decoded, _used, _had_errors) = detect_encoding(html).decode(html);
    decoded.into_owned()
}

//! Character encoding detection and decoding for byte input
//!
//! Uploaded HTML arrives as bytes. Before html5ever sees it, the bytes are
//! decoded to UTF-8 using the first encoding found by this cascade:
//!
//! 1. **Byte order mark**: UTF-8, UTF-16LE or UTF-16BE BOM at the start
//! 2. **Content-Type header**: `charset` parameter supplied by the caller
//! 3. **HTML meta tags**: `<meta charset>` or `<meta http-equiv="Content-Type">`
//!    within the first 1024 bytes
//! 4. **Default**: UTF-8
//!
//! Bytes that are invalid for the chosen encoding, and charset labels that
//! `encoding_rs` does not know, are reported as [`ConversionError::ParseError`].
//!
//! # Examples
//!
//! ```rust
//! use richdoc_converter::charset::{decode_html, detect_encoding};
//!
//! let encoding = detect_encoding(Some("text/html; charset=ISO-8859-1"), b"<p>x</p>").unwrap();
//! assert_eq!(encoding.name(), "windows-1252");
//!
//! let text = decode_html(b"<p>Caf\xE9</p>", Some("text/html; charset=ISO-8859-1")).unwrap();
//! assert_eq!(text, "<p>Café</p>");
//! ```

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

use crate::error::{ConversionError, Result};

/// Maximum bytes to scan for meta charset tags
const META_SCAN_LIMIT: usize = 1024;

/// Extract the `charset` parameter from a Content-Type header value
///
/// ```rust
/// use richdoc_converter::charset::charset_from_content_type;
///
/// assert_eq!(charset_from_content_type("text/html; charset=\"UTF-8\""), Some("UTF-8"));
/// assert_eq!(charset_from_content_type("text/html"), None);
/// ```
pub fn charset_from_content_type(content_type: &str) -> Option<&str> {
    static CHARSET_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    let regex =
        CHARSET_REGEX.get_or_init(|| Regex::new(r#"(?i)charset\s*=\s*"?([^";,\s]+)"?"#).ok());

    regex
        .as_ref()?
        .captures(content_type)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Scan the start of the document for a meta charset declaration
///
/// ```rust
/// use richdoc_converter::charset::charset_from_meta;
///
/// let html = b"<meta http-equiv=\"Content-Type\" content=\"text/html; charset=ISO-8859-1\">";
/// assert_eq!(charset_from_meta(html), Some("ISO-8859-1".to_string()));
/// assert_eq!(charset_from_meta(b"<p>none</p>"), None);
/// ```
pub fn charset_from_meta(html: &[u8]) -> Option<String> {
    let prefix = &html[..html.len().min(META_SCAN_LIMIT)];
    // Lossy is fine here: only ASCII tag syntax matters.
    let prefix = String::from_utf8_lossy(prefix);

    static META_CHARSET_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    static META_HTTP_EQUIV_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

    let meta_charset = META_CHARSET_REGEX
        .get_or_init(|| Regex::new(r#"(?i)<meta\s+charset\s*=\s*["']?([^"';>\s]+)"#).ok());
    let http_equiv = META_HTTP_EQUIV_REGEX.get_or_init(|| {
        Regex::new(
            r#"(?i)<meta\s+http-equiv\s*=\s*["']?Content-Type["']?\s+content\s*=\s*["']?[^"'>]*charset\s*=\s*([^"';>\s]+)"#,
        )
        .ok()
    });

    [meta_charset, http_equiv]
        .into_iter()
        .filter_map(|regex| regex.as_ref())
        .find_map(|regex| {
            regex
                .captures(&prefix)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        })
}

/// Resolve the encoding to decode `html` with
///
/// A BOM wins over everything else; a declared but unknown charset label is
/// an error rather than a silent fallback to UTF-8.
pub fn detect_encoding(
    content_type: Option<&str>,
    html: &[u8],
) -> Result<&'static Encoding> {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return Ok(encoding);
    }

    let declared = content_type
        .and_then(charset_from_content_type)
        .map(str::to_string)
        .or_else(|| charset_from_meta(html));

    match declared {
        Some(label) => Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| {
            ConversionError::ParseError(format!("Unsupported charset '{}'", label))
        }),
        None => Ok(UTF_8),
    }
}

/// Decode HTML bytes to UTF-8 text
///
/// Valid UTF-8 without a BOM is borrowed; everything else is transcoded.
pub fn decode_html<'a>(html: &'a [u8], content_type: Option<&str>) -> Result<Cow<'a, str>> {
    let encoding = detect_encoding(content_type, html)?;

    let body = match Encoding::for_bom(html) {
        Some((_, bom_len)) => &html[bom_len..],
        None => html,
    };

    if encoding == UTF_8 {
        return std::str::from_utf8(body).map(Cow::Borrowed).map_err(|e| {
            ConversionError::ParseError(format!(
                "Invalid UTF-8 at byte position {}: {}",
                e.valid_up_to(),
                e
            ))
        });
    }

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or_else(|| {
            ConversionError::ParseError(format!(
                "Invalid byte sequence for charset '{}'",
                encoding.name()
            ))
        })
}

//! HTML5 parsing using html5ever
//!
//! html5ever implements the WHATWG parsing algorithm, so malformed markup is
//! recovered the same way browsers recover it: unclosed tags are closed,
//! misnested formatting is repaired, and stray content is moved into `body`.
//! The converter accepts whatever tree results.
//!
//! # Examples
//!
//! ```rust
//! use richdoc_converter::parser::{parse_html, parse_html_bytes};
//!
//! // String input cannot fail
//! let dom = parse_html("<h1>Hello");
//!
//! // Byte input is decoded first and can
//! assert!(parse_html_bytes(b"<p>\xFF</p>", None).is_err());
//! ```
//!
//! # Configuration
//!
//! The parser uses the default html5ever configuration: scripting disabled,
//! parse errors collected but ignored, and `RcDom` as the tree sink. Size
//! limits are enforced by [`crate::converter::DocumentConverter`] before
//! parsing.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::RcDom;

use crate::charset::decode_html;
use crate::error::Result;

/// Parse an HTML string into a DOM tree
///
/// Any string is accepted, including the empty string, which yields a
/// document with empty `head` and `body` elements.
pub fn parse_html(html: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default()).one(html)
}

/// Decode HTML bytes and parse them into a DOM tree
///
/// `content_type` is an optional Content-Type header value whose `charset`
/// parameter takes part in encoding detection (see [`crate::charset`]).
///
/// # Errors
///
/// Returns [`crate::ConversionError::ParseError`] when the bytes cannot be
/// decoded with the detected encoding or the declared charset is unknown.
pub fn parse_html_bytes(html: &[u8], content_type: Option<&str>) -> Result<RcDom> {
    let text = decode_html(html, content_type)?;
    Ok(parse_html(&text))
}

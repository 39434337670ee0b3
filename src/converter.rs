//! Document converter - transforms HTML into the document model
//!
//! This module ties the pieces together: input limits, parsing, locating the
//! body, walking blocks and composing inline content. It is the entry point
//! used by request handlers.
//!
//! # Conversion Strategy
//!
//! 1. **Validate**: reject inputs above the configured size cap
//! 2. **Parse**: html5ever builds an `RcDom`, recovering from malformed markup
//! 3. **Walk**: the block walker classifies the body's direct element children
//! 4. **Compose**: every materialized block gets its inline content
//! 5. **Finish**: an empty block list becomes a single empty paragraph
//!
//! Steps 3-5 are total: once a tree exists the conversion cannot fail.
//!
//! # Examples
//!
//! ```rust
//! use richdoc_converter::converter::{ConversionOptions, DocumentConverter};
//!
//! let converter = DocumentConverter::with_options(ConversionOptions {
//!     max_input_bytes: Some(1024 * 1024),
//!     ..Default::default()
//! });
//!
//! let doc = converter.convert_html("<h1>Title</h1><p>Body</p>").unwrap();
//! assert_eq!(doc.content().len(), 2);
//! ```

use markup5ever_rcdom::RcDom;

use crate::block::BlockWalker;
use crate::dom::body_element;
use crate::error::Result;
use crate::inline::InlineComposer;
use crate::limits::{MAX_NESTING_DEPTH, ResourceLimits};
use crate::model::Document;
use crate::parser::{parse_html, parse_html_bytes};

/// Conversion options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Maximum depth of nested inline formatting before degrading to plain text
    pub max_nesting_depth: usize,
    /// Reject inputs larger than this many bytes (`None` = unlimited)
    pub max_input_bytes: Option<usize>,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            max_nesting_depth: MAX_NESTING_DEPTH,
            max_input_bytes: None,
        }
    }
}

impl ConversionOptions {
    fn limits(&self) -> ResourceLimits {
        ResourceLimits::new()
            .with_max_depth(self.max_nesting_depth)
            .with_max_input_bytes(self.max_input_bytes)
    }
}

/// HTML to document converter
///
/// Holds configuration only, so one instance can be shared across threads and
/// reused for any number of conversions.
#[derive(Debug, Clone)]
pub struct DocumentConverter {
    options: ConversionOptions,
    limits: ResourceLimits,
    walker: BlockWalker,
}

impl DocumentConverter {
    /// Create a converter with default options
    pub fn new() -> Self {
        Self::with_options(ConversionOptions::default())
    }

    pub fn with_options(options: ConversionOptions) -> Self {
        let limits = options.limits();
        Self {
            options,
            limits,
            walker: BlockWalker::new(InlineComposer::new(limits)),
        }
    }

    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Convert an already-parsed DOM tree
    ///
    /// Never fails: every element either maps to a block or is dropped.
    pub fn convert(&self, dom: &RcDom) -> Document {
        let body = body_element(dom);
        let blocks = self.walker.walk(&body);

        log::debug!("converted HTML into {} top-level blocks", blocks.len());

        Document::new(blocks)
    }

    /// Parse and convert an HTML string
    ///
    /// # Errors
    ///
    /// Only [`crate::ConversionError::InputTooLarge`] when a size cap is set;
    /// string input always parses.
    pub fn convert_html(&self, html: &str) -> Result<Document> {
        self.limits.validate_input_size(html.len())?;
        Ok(self.convert(&parse_html(html)))
    }

    /// Decode, parse and convert HTML bytes
    ///
    /// `content_type` is the optional Content-Type header sent with the upload.
    ///
    /// # Errors
    ///
    /// - [`crate::ConversionError::InputTooLarge`] when a size cap is exceeded
    /// - [`crate::ConversionError::ParseError`] when the bytes cannot be decoded
    pub fn convert_bytes(&self, html: &[u8], content_type: Option<&str>) -> Result<Document> {
        self.limits.validate_input_size(html.len())?;
        let dom = parse_html_bytes(html, content_type)?;
        Ok(self.convert(&dom))
    }
}

impl Default for DocumentConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert an HTML string with default options
///
/// ```rust
/// use richdoc_converter::convert_document;
///
/// let doc = convert_document("");
/// assert_eq!(doc.to_json().unwrap(), r#"{"type":"doc","content":[{"type":"paragraph"}]}"#);
/// ```
pub fn convert_document(html: &str) -> Document {
    DocumentConverter::new().convert(&parse_html(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConversionError;
    use crate::model::{BlockNode, InlineNode, Mark};
    use proptest::prelude::*;

    #[test]
    fn test_converter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DocumentConverter>();
    }

    #[test]
    fn test_empty_input() {
        let doc = convert_document("");
        assert_eq!(doc.content(), &[BlockNode::empty_paragraph()]);
    }

    #[test]
    fn test_whitespace_input() {
        let doc = convert_document("  \n\t ");
        assert_eq!(doc.content(), &[BlockNode::empty_paragraph()]);
    }

    #[test]
    fn test_mixed_document() {
        let doc = convert_document(
            "<h1>Title</h1>\n<p>Intro with <a href=\"/docs\">docs</a></p>\n<hr>\n<ol><li>One</li></ol>",
        );
        let types: Vec<&str> = doc.content().iter().map(BlockNode::type_name).collect();
        assert_eq!(types, vec!["heading", "paragraph", "horizontalRule", "orderedList"]);
    }

    #[test]
    fn test_convert_html_size_limit() {
        let converter = DocumentConverter::with_options(ConversionOptions {
            max_input_bytes: Some(10),
            ..Default::default()
        });

        assert!(converter.convert_html("<p>short</p>").is_err());
        assert!(converter.convert_html("<p>ok</p>").is_ok());
    }

    #[test]
    fn test_convert_bytes_checks_size_before_decoding() {
        let converter = DocumentConverter::with_options(ConversionOptions {
            max_input_bytes: Some(4),
            ..Default::default()
        });

        // Invalid UTF-8, but the size check comes first.
        let result = converter.convert_bytes(b"\xFF\xFF\xFF\xFF\xFF", None);
        assert!(matches!(result, Err(ConversionError::InputTooLarge { .. })));
    }

    #[test]
    fn test_convert_bytes_invalid_encoding() {
        let result = DocumentConverter::new().convert_bytes(b"<p>\xFF</p>", None);
        assert!(matches!(result, Err(ConversionError::ParseError(_))));
    }

    #[test]
    fn test_convert_bytes_latin1() {
        let doc = DocumentConverter::new()
            .convert_bytes(b"<p>Caf\xE9</p>", Some("text/html; charset=ISO-8859-1"))
            .unwrap();
        assert_eq!(
            doc.content(),
            &[BlockNode::paragraph(vec![InlineNode::text("Café")])]
        );
    }

    #[test]
    fn test_custom_depth_option() {
        let converter = DocumentConverter::with_options(ConversionOptions {
            max_nesting_depth: 1,
            ..Default::default()
        });
        let doc = converter.convert_html("<p><b><i>x</i></b></p>").unwrap();
        let expected = InlineNode::text("x").with_mark(&Mark::Bold);
        assert_eq!(
            doc.content(),
            &[BlockNode::paragraph(vec![expected])]
        );
    }

    proptest! {
        #[test]
        fn prop_never_empty_and_deterministic(
            parts in prop::collection::vec(
                prop::sample::select(vec![
                    "<p>", "</p>", "<div>", "</div>", "<b>", "</b>", "<em>", "</em>",
                    "<ul>", "<li>", "</ul>", "<a href=\"/x\">", "</a>", "<br>", "<hr>",
                    "<h2>", "</h2>", "text", " ", "<span>", "</span>", "<u>",
                ]),
                0..40,
            ),
        ) {
            let html = parts.concat();
            let first = convert_document(&html);
            let second = convert_document(&html);

            prop_assert!(!first.content().is_empty());
            prop_assert_eq!(first, second);
        }
    }
}

//! Richdoc Converter - HTML to rich-document conversion
//!
//! This library converts arbitrary HTML fragments into a canonical,
//! strictly-typed document tree: block nodes (paragraphs, headings, lists,
//! rules, breaks) holding inline text runs with composable marks (bold,
//! italic, underline, link). The tree serializes to the JSON node format used
//! by the structured-document editor and persisted by the storage layer.
//!
//! # Architecture
//!
//! The library is structured into several modules:
//! - `converter`: Entry points and conversion options
//! - `block`: Block walker classifying top-level elements
//! - `inline`: Inline composer building marked text runs
//! - `model`: Document, block, inline and mark types with their JSON shape
//! - `parser`: HTML5 parsing using html5ever
//! - `dom`: Read-only helpers over the parsed tree
//! - `charset`: Character encoding detection and decoding for byte input
//! - `limits`: Nesting depth and input size guards
//! - `fingerprint`: BLAKE3 fingerprints of converted documents
//!
//! # Example
//!
//! ```rust
//! use richdoc_converter::convert_document;
//!
//! let doc = convert_document("<p>Text with <strong><em>both</em></strong></p>");
//! let json = doc.to_value().unwrap();
//! assert_eq!(json["content"][0]["content"][1]["marks"][0]["type"], "italic");
//! assert_eq!(json["content"][0]["content"][1]["marks"][1]["type"], "bold");
//! ```
//!
//! Conversion is pure and synchronous. No state outlives a call, so a
//! [`DocumentConverter`] can be shared freely between threads.

pub mod block;
pub mod charset;
pub mod converter;
pub mod dom;
pub mod error;
pub mod fingerprint;
pub mod inline;
pub mod limits;
pub mod model;
pub mod parser;

// Re-export main types for convenience
pub use converter::{ConversionOptions, DocumentConverter, convert_document};
pub use error::{ConversionError, Result};
pub use model::{BlockNode, Document, InlineNode, LinkAttrs, Mark, Marks};
pub use parser::{parse_html, parse_html_bytes};

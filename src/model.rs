//! The document model
//!
//! Block and inline nodes mirror the JSON node representation consumed by the
//! structured-document editor. Field names and variant tags (`type`, `attrs`,
//! `content`, `text`, `marks`) are a compatibility contract with downstream
//! consumers and the storage layer.
//!
//! # Example
//!
//! ```rust
//! use richdoc_converter::model::{BlockNode, Document, InlineNode, Mark};
//!
//! let doc = Document::new(vec![BlockNode::paragraph(vec![
//!     InlineNode::text("Hello").with_mark(&Mark::Bold),
//! ])]);
//!
//! assert_eq!(
//!     doc.to_json().unwrap(),
//!     r#"{"type":"doc","content":[{"type":"paragraph","content":[{"type":"text","text":"Hello","marks":[{"type":"bold"}]}]}]}"#
//! );
//! ```

use serde::{Deserialize, Serialize};
use std::mem;

use crate::error::{ConversionError, Result};
use crate::fingerprint::ContentFingerprinter;

/// `rel` value carried by every link mark
pub const LINK_REL: &str = "noopener noreferrer nofollow";

/// `target` used when the source anchor has none
pub const DEFAULT_LINK_TARGET: &str = "_blank";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
enum DocType {
    #[serde(rename = "doc")]
    Doc,
}

/// Root of a converted document
///
/// A document always holds at least one block; [`Document::new`] substitutes a
/// single empty paragraph for an empty block list. Deserializing a stored
/// document with an empty `content` array is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredDocument")]
pub struct Document {
    #[serde(rename = "type")]
    doc_type: DocType,
    content: Vec<BlockNode>,
}

impl Document {
    pub fn new(content: Vec<BlockNode>) -> Self {
        let content = if content.is_empty() {
            vec![BlockNode::empty_paragraph()]
        } else {
            content
        };

        Self {
            doc_type: DocType::Doc,
            content,
        }
    }

    /// Document holding a single empty paragraph
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn content(&self) -> &[BlockNode] {
        &self.content
    }

    pub fn into_content(self) -> Vec<BlockNode> {
        self.content
    }

    /// Compact JSON encoding, the form persisted by the storage layer
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// BLAKE3 fingerprint of the compact JSON encoding
    pub fn fingerprint(&self) -> Result<String> {
        ContentFingerprinter::new().fingerprint_document(self)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

/// Wire form of a document before validation
#[derive(Deserialize)]
struct StoredDocument {
    #[serde(rename = "type")]
    doc_type: DocType,
    content: Vec<BlockNode>,
}

impl TryFrom<StoredDocument> for Document {
    type Error = ConversionError;

    fn try_from(stored: StoredDocument) -> Result<Self> {
        if stored.content.is_empty() {
            return Err(ConversionError::InvalidDocument(
                "document content must hold at least one block".to_string(),
            ));
        }

        Ok(Self {
            doc_type: stored.doc_type,
            content: stored.content,
        })
    }
}

/// Levels `h1`..`h6`
const HEADING_LEVELS: std::ops::RangeInclusive<u8> = 1..=6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredHeadingAttrs")]
pub struct HeadingAttrs {
    pub level: u8,
}

#[derive(Deserialize)]
struct StoredHeadingAttrs {
    level: u8,
}

impl TryFrom<StoredHeadingAttrs> for HeadingAttrs {
    type Error = ConversionError;

    fn try_from(stored: StoredHeadingAttrs) -> Result<Self> {
        if !HEADING_LEVELS.contains(&stored.level) {
            return Err(ConversionError::InvalidDocument(format!(
                "heading level {} is outside 1..=6",
                stored.level
            )));
        }
        Ok(Self {
            level: stored.level,
        })
    }
}

/// Block-level node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BlockNode {
    Paragraph {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<Vec<InlineNode>>,
    },
    Heading {
        attrs: HeadingAttrs,
        content: Vec<InlineNode>,
    },
    BulletList {
        content: Vec<BlockNode>,
    },
    OrderedList {
        content: Vec<BlockNode>,
    },
    ListItem {
        content: Vec<BlockNode>,
    },
    HorizontalRule,
    HardBreak,
}

impl BlockNode {
    /// Paragraph that always serializes its `content` field, even when empty
    pub fn paragraph(content: Vec<InlineNode>) -> Self {
        BlockNode::Paragraph {
            content: Some(content),
        }
    }

    /// Paragraph whose `content` field is omitted when there is nothing inside
    pub fn paragraph_or_empty(content: Vec<InlineNode>) -> Self {
        if content.is_empty() {
            Self::empty_paragraph()
        } else {
            Self::paragraph(content)
        }
    }

    pub fn empty_paragraph() -> Self {
        BlockNode::Paragraph { content: None }
    }

    pub fn heading(level: u8, content: Vec<InlineNode>) -> Self {
        BlockNode::Heading {
            attrs: HeadingAttrs { level },
            content,
        }
    }

    /// List item wrapping a single paragraph
    pub fn list_item(content: Vec<InlineNode>) -> Self {
        BlockNode::ListItem {
            content: vec![Self::paragraph(content)],
        }
    }

    /// Tag written to the `type` field
    pub fn type_name(&self) -> &'static str {
        match self {
            BlockNode::Paragraph { .. } => "paragraph",
            BlockNode::Heading { .. } => "heading",
            BlockNode::BulletList { .. } => "bulletList",
            BlockNode::OrderedList { .. } => "orderedList",
            BlockNode::ListItem { .. } => "listItem",
            BlockNode::HorizontalRule => "horizontalRule",
            BlockNode::HardBreak => "hardBreak",
        }
    }

    /// Inline children of paragraphs and headings
    pub fn inline_content(&self) -> Option<&[InlineNode]> {
        match self {
            BlockNode::Paragraph { content } => content.as_deref(),
            BlockNode::Heading { content, .. } => Some(content),
            _ => None,
        }
    }

    /// Block children of lists and list items
    pub fn block_content(&self) -> Option<&[BlockNode]> {
        match self {
            BlockNode::BulletList { content }
            | BlockNode::OrderedList { content }
            | BlockNode::ListItem { content } => Some(content),
            _ => None,
        }
    }
}

/// Inline node inside a paragraph or heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InlineNode {
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Marks::is_empty")]
        marks: Marks,
    },
    HardBreak,
}

impl InlineNode {
    /// Unmarked text run
    pub fn text(text: impl Into<String>) -> Self {
        InlineNode::Text {
            text: text.into(),
            marks: Marks::new(),
        }
    }

    /// Adds `mark` to a text run; hard breaks come back unchanged
    pub fn with_mark(self, mark: &Mark) -> Self {
        match self {
            InlineNode::Text { text, mut marks } => {
                marks.insert(mark.clone());
                InlineNode::Text { text, marks }
            }
            InlineNode::HardBreak => InlineNode::HardBreak,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            InlineNode::Text { text, .. } => Some(text),
            InlineNode::HardBreak => None,
        }
    }

    pub fn marks(&self) -> Option<&Marks> {
        match self {
            InlineNode::Text { marks, .. } => Some(marks),
            InlineNode::HardBreak => None,
        }
    }
}

/// Attributes of a link mark
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkAttrs {
    pub href: String,
    pub target: String,
    pub rel: String,
    /// Source classes are never carried over; always serialized as `null`
    pub class: Option<String>,
}

impl LinkAttrs {
    /// Link attributes with the fixed `rel` and an explicit `null` class
    pub fn new(href: impl Into<String>, target: Option<&str>) -> Self {
        Self {
            href: href.into(),
            target: target.unwrap_or(DEFAULT_LINK_TARGET).to_string(),
            rel: LINK_REL.to_string(),
            class: None,
        }
    }
}

/// Style or annotation attached to a text run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "attrs", rename_all = "camelCase")]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Link(LinkAttrs),
}

impl Mark {
    pub fn link(href: impl Into<String>, target: Option<&str>) -> Self {
        Mark::Link(LinkAttrs::new(href, target))
    }

    /// Whether both marks are of the same kind, ignoring link attributes
    pub fn same_kind(&self, other: &Mark) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }
}

/// Ordered set of marks keyed by mark kind
///
/// Insertion order is preserved and is part of the serialized shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Marks(Vec<Mark>);

impl Marks {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Mark> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Mark] {
        &self.0
    }

    pub fn contains_kind(&self, mark: &Mark) -> bool {
        self.0.iter().any(|existing| existing.same_kind(mark))
    }

    /// Appends `mark` unless a mark of the same kind is present.
    /// Returns whether the set changed.
    pub fn insert(&mut self, mark: Mark) -> bool {
        if self.contains_kind(&mark) {
            return false;
        }
        self.0.push(mark);
        true
    }
}

impl FromIterator<Mark> for Marks {
    fn from_iter<I: IntoIterator<Item = Mark>>(iter: I) -> Self {
        let mut marks = Marks::new();
        for mark in iter {
            marks.insert(mark);
        }
        marks
    }
}

impl<'a> IntoIterator for &'a Marks {
    type Item = &'a Mark;
    type IntoIter = std::slice::Iter<'a, Mark>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

//! Block walker - classifies top-level elements into block nodes
//!
//! Only the direct element children of `body` are considered; top-level text
//! is ignored. Each element maps to at most one block:
//!
//! | element | block |
//! |---|---|
//! | `h1`..`h6` | heading with the tag's level |
//! | `p` | paragraph, `content` omitted when empty |
//! | `div` with direct text | paragraph over all inline content |
//! | `div` without direct text | dropped, nested blocks included |
//! | `ul` / `ol` | bullet / ordered list of direct `li` children |
//! | `hr` | horizontal rule |
//! | `br` | hard break |
//! | anything else | paragraph of trimmed text, or dropped when empty |

use markup5ever_rcdom::Handle;

use crate::dom::{element_children, element_name, has_direct_text, trimmed_text};
use crate::inline::InlineComposer;
use crate::model::{BlockNode, InlineNode};

/// Classification of a top-level element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTag {
    Heading(u8),
    Paragraph,
    Container,
    BulletList,
    OrderedList,
    HorizontalRule,
    Break,
    /// Unknown element; degrades to a plain-text paragraph
    Other,
}

impl BlockTag {
    pub fn from_name(name: &str) -> Self {
        match name {
            "p" => BlockTag::Paragraph,
            "div" => BlockTag::Container,
            "ul" => BlockTag::BulletList,
            "ol" => BlockTag::OrderedList,
            "hr" => BlockTag::HorizontalRule,
            "br" => BlockTag::Break,
            _ => heading_level(name).map_or(BlockTag::Other, BlockTag::Heading),
        }
    }
}

/// Level of an `h1`..`h6` tag; only a single digit after `h` matches
fn heading_level(name: &str) -> Option<u8> {
    match name.as_bytes() {
        [b'h', digit @ b'1'..=b'6'] => Some(digit - b'0'),
        _ => None,
    }
}

/// Walks the body of a parsed document and builds its blocks
#[derive(Debug, Clone, Copy)]
pub struct BlockWalker {
    composer: InlineComposer,
}

impl BlockWalker {
    pub fn new(composer: InlineComposer) -> Self {
        Self { composer }
    }

    /// Blocks for the direct element children of `body`, in document order
    pub fn walk(&self, body: &Handle) -> Vec<BlockNode> {
        element_children(body)
            .iter()
            .filter_map(|element| self.classify(element))
            .collect()
    }

    /// Block for a single element, or `None` when it contributes nothing
    pub fn classify(&self, element: &Handle) -> Option<BlockNode> {
        let name = element_name(element)?;

        let block = match BlockTag::from_name(name) {
            BlockTag::Heading(level) => {
                Some(BlockNode::heading(level, self.composer.compose(element)))
            }
            BlockTag::Paragraph => {
                Some(BlockNode::paragraph_or_empty(self.composer.compose(element)))
            }
            BlockTag::Container => {
                if has_direct_text(element) {
                    Some(BlockNode::paragraph(self.composer.compose(element)))
                } else {
                    None
                }
            }
            BlockTag::BulletList => Some(BlockNode::BulletList {
                content: self.list_items(element),
            }),
            BlockTag::OrderedList => Some(BlockNode::OrderedList {
                content: self.list_items(element),
            }),
            BlockTag::HorizontalRule => Some(BlockNode::HorizontalRule),
            BlockTag::Break => Some(BlockNode::HardBreak),
            BlockTag::Other => {
                let text = trimmed_text(element);
                if text.is_empty() {
                    None
                } else {
                    Some(BlockNode::paragraph(vec![InlineNode::text(text)]))
                }
            }
        };

        if block.is_none() {
            log::trace!("dropping <{}> element with no convertible content", name);
        }

        block
    }

    /// One list item per direct `li` child; nested lists are not promoted
    fn list_items(&self, list: &Handle) -> Vec<BlockNode> {
        element_children(list)
            .iter()
            .filter(|child| element_name(child) == Some("li"))
            .map(|item| BlockNode::list_item(self.composer.compose(item)))
            .collect()
    }
}

impl Default for BlockWalker {
    fn default() -> Self {
        Self::new(InlineComposer::default())
    }
}

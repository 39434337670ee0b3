//! Inline composer - turns the children of a block element into inline nodes
//!
//! Text children become unmarked text runs. Formatting elements are composed
//! recursively and their mark is then added to every text run the recursion
//! produced, so the innermost element's mark comes first:
//!
//! ```text
//! <strong><em>both</em></strong>  ->  text "both", marks [italic, bold]
//! ```
//!
//! Hard breaks pass through formatting elements unmarked. Any other element
//! contributes only its trimmed text content.
//!
//! Recursion depth is bounded by [`ResourceLimits`]: a formatting element at
//! the cap is not descended into and degrades to a plain text run.

use markup5ever_rcdom::{Handle, NodeData};

use crate::dom::{attribute, trimmed_text};
use crate::limits::ResourceLimits;
use crate::model::{InlineNode, Mark};

/// Classification of an element found inside a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineTag {
    Bold,
    Italic,
    Underline,
    Link,
    Break,
    /// Unknown element; only its trimmed text survives
    Other,
}

impl InlineTag {
    pub fn from_name(name: &str) -> Self {
        match name {
            "strong" | "b" => InlineTag::Bold,
            "em" | "i" => InlineTag::Italic,
            "u" => InlineTag::Underline,
            "a" => InlineTag::Link,
            "br" => InlineTag::Break,
            _ => InlineTag::Other,
        }
    }
}

/// Builds inline content for paragraphs, headings and list items
#[derive(Debug, Clone, Copy)]
pub struct InlineComposer {
    limits: ResourceLimits,
}

impl InlineComposer {
    pub fn new(limits: ResourceLimits) -> Self {
        Self { limits }
    }

    /// Compose the direct children of `element` into inline nodes
    pub fn compose(&self, element: &Handle) -> Vec<InlineNode> {
        self.compose_at(element, 0)
    }

    fn compose_at(&self, element: &Handle, depth: usize) -> Vec<InlineNode> {
        let mut content = Vec::new();

        for child in element.children.borrow().iter() {
            match child.data {
                NodeData::Text { ref contents } => {
                    let text = contents.borrow();
                    // Whitespace-only runs are kept; only empty strings are dropped.
                    if !text.is_empty() {
                        content.push(InlineNode::text(&**text));
                    }
                }
                NodeData::Element { ref name, .. } => {
                    self.compose_element(child, InlineTag::from_name(&name.local), depth, &mut content);
                }
                _ => {}
            }
        }

        content
    }

    fn compose_element(
        &self,
        element: &Handle,
        tag: InlineTag,
        depth: usize,
        content: &mut Vec<InlineNode>,
    ) {
        let mark = match tag {
            InlineTag::Bold => Mark::Bold,
            InlineTag::Italic => Mark::Italic,
            InlineTag::Underline => Mark::Underline,
            InlineTag::Link => link_mark(element),
            InlineTag::Break => {
                content.push(InlineNode::HardBreak);
                return;
            }
            InlineTag::Other => {
                push_plain_text(element, content);
                return;
            }
        };

        if !self.limits.allows_depth(depth) {
            log::warn!(
                "inline nesting depth {} reached the limit of {}, keeping plain text",
                depth,
                self.limits.max_depth()
            );
            push_plain_text(element, content);
            return;
        }

        let inner = self.compose_at(element, depth + 1);
        content.extend(inner.into_iter().map(|node| node.with_mark(&mark)));
    }
}

impl Default for InlineComposer {
    fn default() -> Self {
        Self::new(ResourceLimits::default())
    }
}

/// Link mark from an anchor's attributes; empty values count as absent
fn link_mark(element: &Handle) -> Mark {
    let href = attribute(element, "href").unwrap_or_default();
    let target = attribute(element, "target").filter(|target| !target.is_empty());
    Mark::link(href, target.as_deref())
}

fn push_plain_text(element: &Handle, content: &mut Vec<InlineNode>) {
    let text = trimmed_text(element);
    if !text.is_empty() {
        content.push(InlineNode::text(text));
    }
}

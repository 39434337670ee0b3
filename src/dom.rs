//! Read-only helpers over the html5ever `RcDom`
//!
//! The converter only needs a small view of the parsed tree: the body element,
//! tag names, attribute lookup, direct children and text content. Text content
//! is gathered with an explicit stack so arbitrarily deep markup never grows the
//! call stack.

use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Locate the first `body` element in document order, falling back to the
/// document root when the tree has none.
pub fn body_element(dom: &RcDom) -> Handle {
    let mut stack = vec![dom.document.clone()];

    while let Some(node) = stack.pop() {
        if element_name(&node) == Some("body") {
            return node;
        }
        for child in node.children.borrow().iter().rev() {
            stack.push(child.clone());
        }
    }

    dom.document.clone()
}

/// Local tag name of an element node
pub fn element_name(node: &Handle) -> Option<&str> {
    match node.data {
        NodeData::Element { ref name, .. } => Some(&*name.local),
        _ => None,
    }
}

/// Value of attribute `name`, if present on an element node
pub fn attribute(node: &Handle, name: &str) -> Option<String> {
    match node.data {
        NodeData::Element { ref attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

/// Direct element children in document order
pub fn element_children(node: &Handle) -> Vec<Handle> {
    node.children
        .borrow()
        .iter()
        .filter(|child| matches!(child.data, NodeData::Element { .. }))
        .cloned()
        .collect()
}

/// Whether a direct text child carries non-whitespace content
pub fn has_direct_text(node: &Handle) -> bool {
    node.children.borrow().iter().any(|child| match child.data {
        NodeData::Text { ref contents } => !trim_text(&contents.borrow()).is_empty(),
        _ => false,
    })
}

/// Concatenated text of all descendant text nodes, in document order
pub fn text_content(node: &Handle) -> String {
    let mut output = String::new();
    let mut stack = vec![node.clone()];

    while let Some(current) = stack.pop() {
        match current.data {
            NodeData::Text { ref contents } => output.push_str(&contents.borrow()),
            NodeData::Document | NodeData::Element { .. } => {
                for child in current.children.borrow().iter().rev() {
                    stack.push(child.clone());
                }
            }
            _ => {}
        }
    }

    output
}

/// Strip surrounding whitespace, counting U+FEFF as whitespace
///
/// ```
/// use richdoc_converter::dom::trim_text;
///
/// assert_eq!(trim_text("\u{feff} word \n"), "word");
/// ```
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Text content with surrounding whitespace removed
pub fn trimmed_text(node: &Handle) -> String {
    let text = text_content(node);
    let trimmed = trim_text(&text);
    if trimmed.len() == text.len() {
        text
    } else {
        trimmed.to_string()
    }
}

//! End-to-end conversion tests
//!
//! These tests drive `convert_document` with HTML strings and check the JSON
//! shape downstream consumers deserialize against.

use proptest::prelude::*;
use richdoc_converter::{BlockNode, InlineNode, Mark, convert_document};
use serde_json::{Value, json};

fn convert_to_json(html: &str) -> Value {
    convert_document(html)
        .to_value()
        .expect("Document should serialize")
}

#[test]
fn test_empty_input_yields_single_empty_paragraph() {
    assert_eq!(
        convert_to_json(""),
        json!({ "type": "doc", "content": [{ "type": "paragraph" }] })
    );
}

#[test]
fn test_simple_paragraph() {
    assert_eq!(
        convert_to_json("<p>Hello world</p>"),
        json!({
            "type": "doc",
            "content": [{
                "type": "paragraph",
                "content": [{ "type": "text", "text": "Hello world" }]
            }]
        })
    );
}

#[test]
fn test_heading_level_extraction() {
    let json = convert_to_json("<h1>Title</h1>");
    let content = json["content"].as_array().expect("content array");

    assert_eq!(content.len(), 1);
    assert_eq!(content[0]["type"], "heading");
    assert_eq!(content[0]["attrs"]["level"], 1);
}

#[test]
fn test_all_heading_levels() {
    let html: String = (1..=6).map(|level| format!("<h{level}>H{level}</h{level}>")).collect();
    let json = convert_to_json(&html);

    for (index, block) in json["content"].as_array().expect("content array").iter().enumerate() {
        assert_eq!(block["type"], "heading");
        assert_eq!(block["attrs"]["level"], index as u64 + 1);
    }
}

#[test]
fn test_bold_text_marks() {
    let json = convert_to_json("<p>This is <strong>bold</strong> text</p>");
    let inline = json["content"][0]["content"].as_array().expect("inline content");

    assert_eq!(inline.len(), 3);
    assert_eq!(inline[1]["type"], "text");
    assert_eq!(inline[1]["marks"], json!([{ "type": "bold" }]));
    assert!(inline[0].get("marks").is_none());
}

#[test]
fn test_mark_composition_order() {
    let json = convert_to_json(
        "<p>Text with <strong>bold</strong> and <em>italic</em> and <strong><em>both</em></strong></p>",
    );
    let inline = json["content"][0]["content"].as_array().expect("inline content");
    let last = inline.last().expect("final text run");

    assert_eq!(last["text"], "both");
    assert_eq!(last["marks"], json!([{ "type": "italic" }, { "type": "bold" }]));
    assert_eq!(inline.len(), 6);
}

#[test]
fn test_link_mark_completeness() {
    let json = convert_to_json(r#"<p>Visit <a href="https://example.com">example</a></p>"#);
    let link_text = &json["content"][0]["content"][1];

    assert_eq!(
        link_text,
        &json!({
            "type": "text",
            "text": "example",
            "marks": [{
                "type": "link",
                "attrs": {
                    "href": "https://example.com",
                    "target": "_blank",
                    "rel": "noopener noreferrer nofollow",
                    "class": null
                }
            }]
        })
    );
}

#[test]
fn test_unordered_list_shape() {
    let json = convert_to_json("<ul><li>Item 1</li><li>Item 2</li></ul>");
    let blocks = json["content"].as_array().expect("content array");

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0]["type"], "bulletList");

    let items = blocks[0]["content"].as_array().expect("list items");
    assert_eq!(items.len(), 2);
    for (item, text) in items.iter().zip(["Item 1", "Item 2"]) {
        assert_eq!(item["type"], "listItem");
        assert_eq!(
            item["content"],
            json!([{ "type": "paragraph", "content": [{ "type": "text", "text": text }] }])
        );
    }
}

#[test]
fn test_ordered_list_shape() {
    let json = convert_to_json("<ol><li>First</li><li>Second</li></ol>");
    assert_eq!(json["content"][0]["type"], "orderedList");
    assert_eq!(json["content"][0]["content"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_unknown_element_fallback() {
    let doc = convert_document("<article>  <span>Plain</span> <b>words</b>  </article>");
    assert_eq!(
        doc.content(),
        &[BlockNode::paragraph(vec![InlineNode::text("Plain words")])]
    );
}

#[test]
fn test_whitespace_text_child_is_preserved() {
    let json = convert_to_json("<p><b>a</b> <i>b</i></p>");
    let inline = json["content"][0]["content"].as_array().expect("inline content");

    assert_eq!(inline[1], json!({ "type": "text", "text": " " }));
}

#[test]
fn test_byte_order_mark_only_element_is_dropped() {
    assert_eq!(
        convert_to_json("<section>\u{feff}</section>"),
        json!({ "type": "doc", "content": [{ "type": "paragraph" }] })
    );
}

#[test]
fn test_empty_paragraph_omits_content() {
    assert_eq!(
        convert_to_json("<p></p><p>x</p>")["content"][0],
        json!({ "type": "paragraph" })
    );
}

#[test]
fn test_horizontal_rule_and_break_never_get_content() {
    assert_eq!(
        convert_to_json("<hr><br>")["content"],
        json!([{ "type": "horizontalRule" }, { "type": "hardBreak" }])
    );
}

#[test]
fn test_inline_hard_break() {
    let doc = convert_document("<p>line one<br>line two</p>");
    assert_eq!(
        doc.content(),
        &[BlockNode::paragraph(vec![
            InlineNode::text("line one"),
            InlineNode::HardBreak,
            InlineNode::text("line two"),
        ])]
    );
}

#[test]
fn test_div_container_rules() {
    let promoted = convert_document("<div>Direct <u>text</u></div>");
    assert_eq!(
        promoted.content(),
        &[BlockNode::paragraph(vec![
            InlineNode::text("Direct "),
            InlineNode::text("text").with_mark(&Mark::Underline),
        ])]
    );

    let dropped = convert_document("<div><p>Only nested</p></div>");
    assert_eq!(dropped.content(), &[BlockNode::empty_paragraph()]);
}

#[test]
fn test_full_html_document_uses_body() {
    let doc = convert_document(
        "<!DOCTYPE html><html><head><title>Ignored</title></head><body><h2>Kept</h2></body></html>",
    );
    assert_eq!(
        doc.content(),
        &[BlockNode::heading(2, vec![InlineNode::text("Kept")])]
    );
}

#[test]
fn test_malformed_markup_is_recovered() {
    let doc = convert_document("<p>unclosed <b>bold<p>second");
    assert_eq!(doc.content().len(), 2);
    assert!(doc.content().iter().all(|block| block.type_name() == "paragraph"));
}

#[test]
fn test_email_template_import() {
    let html = r#"
        <h1>Welcome aboard</h1>
        <p>Hi there,</p>
        <p>Thanks for signing up. Here is what to do next:</p>
        <ol>
            <li>Confirm your <strong>email</strong></li>
            <li>Read the <a href="https://example.com/guide" target="_self">guide</a></li>
        </ol>
        <hr>
        <div>Questions? Reply to this email.</div>
    "#;
    let json = convert_to_json(html);
    let types: Vec<&str> = json["content"]
        .as_array()
        .expect("content array")
        .iter()
        .filter_map(|block| block["type"].as_str())
        .collect();

    assert_eq!(
        types,
        vec!["heading", "paragraph", "paragraph", "orderedList", "horizontalRule", "paragraph"]
    );

    let guide = &json["content"][3]["content"][1]["content"][0]["content"][1];
    assert_eq!(guide["text"], "guide");
    assert_eq!(guide["marks"][0]["attrs"]["target"], "_self");
}

proptest! {
    #[test]
    fn prop_conversion_is_deterministic(html in "[a-z<>/ ]{0,120}") {
        let first = convert_document(&html).to_json().unwrap();
        let second = convert_document(&html).to_json().unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_document_is_never_empty(html in "\\PC{0,200}") {
        prop_assert!(!convert_document(&html).content().is_empty());
    }

    #[test]
    fn prop_marks_have_distinct_kinds(
        tags in prop::collection::vec(
            prop::sample::select(vec!["b", "strong", "i", "em", "u", "a"]),
            1..8,
        ),
        text in "[a-z]{1,10}",
    ) {
        let open: String = tags.iter().map(|tag| format!("<{tag}>")).collect();
        let close: String = tags.iter().rev().map(|tag| format!("</{tag}>")).collect();
        let doc = convert_document(&format!("<p>{open}{text}{close}</p>"));

        for block in doc.content() {
            for node in block.inline_content().unwrap_or_default() {
                if let Some(marks) = node.marks() {
                    for (i, a) in marks.iter().enumerate() {
                        for b in marks.iter().skip(i + 1) {
                            prop_assert!(!a.same_kind(b));
                        }
                    }
                }
            }
        }
    }
}

#![no_main]

use libfuzzer_sys::fuzz_target;
use richdoc_converter::{Document, convert_document};

fuzz_target!(|html: &str| {
    let doc = convert_document(html);
    assert!(!doc.content().is_empty());

    let json = doc.to_json();
    assert!(json.is_ok(), "serialization failed: {json:?}");

    // Converted output must always read back as a valid stored document.
    if let Ok(json) = json {
        let stored: Result<Document, _> = serde_json::from_str(&json);
        assert_eq!(stored.ok().as_ref(), Some(&doc));
    }
});

#![no_main]

use libfuzzer_sys::fuzz_target;
use richdoc_converter::converter::DocumentConverter;

fuzz_target!(|data: &[u8]| {
    // First byte picks a declared charset so every decoding path gets exercised.
    let (content_type, html) = match data.split_first() {
        Some((selector, rest)) => {
            let content_type = match selector % 4 {
                0 => None,
                1 => Some("text/html; charset=utf-8"),
                2 => Some("text/html; charset=windows-1252"),
                _ => Some("text/html; charset=shift_jis"),
            };
            (content_type, rest)
        }
        None => (None, data),
    };

    let converter = DocumentConverter::new();
    if let Ok(doc) = converter.convert_bytes(html, content_type) {
        assert!(!doc.content().is_empty());
    }
});

//! Basic conversion example demonstrating the document converter

use richdoc_converter::converter::{ConversionOptions, DocumentConverter};

fn main() {
    println!("=== Richdoc Converter - Basic Examples ===\n");

    // Example 1: Simple heading and paragraph
    run_example("Simple heading and paragraph", "<h1>Welcome</h1><p>This is a test document.</p>");

    // Example 2: Composed marks
    run_example(
        "Composed marks",
        "<p>Text with <strong>bold</strong> and <strong><em>both</em></strong></p>",
    );

    // Example 3: Links get fixed attributes
    run_example("Links", r#"<p>Visit <a href="https://example.com">example</a></p>"#);

    // Example 4: Lists
    run_example("Lists", "<ul><li>Item 1</li><li>Item 2</li></ul>");

    // Example 5: Empty input
    run_example("Empty input", "");

    // Example 6: Latin-1 bytes with a Content-Type header
    example_bytes();
}

fn run_example(title: &str, html: &str) {
    println!("Example: {}", title);
    println!("Input HTML:");
    println!("{}\n", html);

    let converter = DocumentConverter::new();
    match converter.convert_html(html).and_then(|doc| doc.to_json_pretty()) {
        Ok(json) => {
            println!("Output document:");
            println!("{}", json);
        }
        Err(e) => println!("Conversion failed: {}", e),
    }
    println!("---\n");
}

fn example_bytes() {
    println!("Example: Latin-1 bytes");
    let html = b"<p>Caf\xE9 au lait</p>";
    let converter = DocumentConverter::with_options(ConversionOptions {
        max_input_bytes: Some(64 * 1024),
        ..Default::default()
    });

    match converter.convert_bytes(html, Some("text/html; charset=ISO-8859-1")) {
        Ok(doc) => {
            println!("Output document:");
            println!("{}", doc.to_json().unwrap_or_default());
            if let Ok(fingerprint) = doc.fingerprint() {
                println!("Fingerprint: {}", fingerprint);
            }
        }
        Err(e) => println!("Conversion failed: {}", e),
    }
    println!("---\n");
}

//! Content fingerprints using BLAKE3 hashing
//!
//! The storage layer persists documents as compact JSON. A fingerprint of that
//! encoding lets callers detect whether a re-imported document actually changed
//! without comparing trees.
//!
//! # Algorithm
//!
//! 1. Encode the document as compact JSON (field order is fixed by the model)
//! 2. Hash the bytes with BLAKE3
//! 3. Keep the first 128 bits and encode them as lowercase hex
//!
//! # Example
//!
//! ```
//! use richdoc_converter::convert_document;
//! use richdoc_converter::fingerprint::ContentFingerprinter;
//!
//! let fingerprinter = ContentFingerprinter::new();
//! let doc = convert_document("<p>Hello</p>");
//!
//! let first = fingerprinter.fingerprint_document(&doc).unwrap();
//! let second = fingerprinter.fingerprint_document(&convert_document("<p>Hello</p>")).unwrap();
//! assert_eq!(first, second);
//! assert_eq!(first.len(), 32);
//! ```

use crate::error::Result;
use crate::model::Document;

/// Number of hash bytes kept in a fingerprint
const FINGERPRINT_BYTES: usize = 16;

/// Fingerprint generator using BLAKE3
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentFingerprinter;

impl ContentFingerprinter {
    pub fn new() -> Self {
        Self
    }

    /// Fingerprint raw bytes (32 lowercase hex characters)
    pub fn fingerprint_bytes(&self, bytes: &[u8]) -> String {
        let hash = blake3::hash(bytes);
        hex::encode(&hash.as_bytes()[..FINGERPRINT_BYTES])
    }

    /// Fingerprint the compact JSON encoding of `document`
    pub fn fingerprint_document(&self, document: &Document) -> Result<String> {
        let json = serde_json::to_vec(document)?;
        Ok(self.fingerprint_bytes(&json))
    }
}

//! Resource limits for untrusted HTML
//!
//! Conversion cost is linear in the number of DOM nodes, and recursion depth
//! follows inline formatting depth. Two guards keep adversarial input bounded:
//!
//! - **Nesting depth**: the inline composer stops recursing into formatting
//!   elements once the cap is reached and keeps only their plain text.
//! - **Input size**: an optional byte cap checked before parsing.

use crate::error::{ConversionError, Result};

/// Default maximum depth of nested inline formatting elements
pub const MAX_NESTING_DEPTH: usize = 512;

/// Limits applied to a single conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLimits {
    max_depth: usize,
    max_input_bytes: Option<usize>,
}

impl ResourceLimits {
    pub fn new() -> Self {
        Self {
            max_depth: MAX_NESTING_DEPTH,
            max_input_bytes: None,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_input_bytes(mut self, max_input_bytes: Option<usize>) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn max_input_bytes(&self) -> Option<usize> {
        self.max_input_bytes
    }

    /// Whether an element at `depth` may still be descended into
    ///
    /// ```
    /// use richdoc_converter::limits::ResourceLimits;
    ///
    /// let limits = ResourceLimits::new().with_max_depth(4);
    /// assert!(limits.allows_depth(3));
    /// assert!(!limits.allows_depth(4));
    /// ```
    pub fn allows_depth(&self, depth: usize) -> bool {
        depth < self.max_depth
    }

    /// Reject inputs larger than the configured cap
    ///
    /// ```
    /// use richdoc_converter::limits::ResourceLimits;
    ///
    /// let limits = ResourceLimits::new().with_max_input_bytes(Some(8));
    /// assert!(limits.validate_input_size(8).is_ok());
    /// assert!(limits.validate_input_size(9).is_err());
    /// ```
    pub fn validate_input_size(&self, size: usize) -> Result<()> {
        match self.max_input_bytes {
            Some(limit) if size > limit => Err(ConversionError::InputTooLarge { size, limit }),
            _ => Ok(()),
        }
    }
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self::new()
    }
}

//! Error types for tokenstate-core
//!
//! This module defines all error types raised by the key codec, the key
//! catalog and the quantity type. We use `thiserror` for automatic `Display`
//! and `Error` trait implementations.
//!
//! Every variant carries enough context (offending text, byte position,
//! expected vs. found counts) to diagnose the failure without re-running it.

use thiserror::Error;

/// Result type alias for tokenstate-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for key encoding and quantity arithmetic
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A key attribute contains a reserved codepoint (U+0000 or U+10FFFF)
    #[error(
        "attribute contains {} at byte position {position}; U+0000 and U+10FFFF are not allowed in a composite key attribute",
        display_codepoint(.codepoint)
    )]
    InvalidAttribute {
        /// The offending codepoint
        codepoint: char,
        /// Byte offset of the codepoint inside the attribute
        position: usize,
    },

    /// Key or attribute bytes are not valid UTF-8
    #[error("not valid UTF-8 at byte position {position}")]
    InvalidUtf8 {
        /// Byte offset of the first invalid sequence
        position: usize,
    },

    /// A stored key does not split into the expected shape
    #[error("malformed composite key {key}: found {found} components, need at least {required}")]
    MalformedKey {
        /// Escaped rendering of the key
        key: String,
        /// Components found (object type included)
        found: usize,
        /// Components required (object type included)
        required: usize,
    },

    /// Key has an unexpected object type
    #[error("key {key} has object type '{found}', expected '{expected}'")]
    WrongPrefix {
        /// Escaped rendering of the key
        key: String,
        /// Expected object type
        expected: &'static str,
        /// Object type found in the key
        found: String,
    },

    /// Key has an unexpected number of attributes
    #[error("key {key} should contain {expected} attributes, got {found}")]
    WrongArity {
        /// Escaped rendering of the key
        key: String,
        /// Expected attribute count
        expected: usize,
        /// Attribute count found in the key
        found: usize,
    },

    /// Key has an unexpected marker attribute
    #[error("key {key} has marker '{found}', expected '{expected}'")]
    WrongMarker {
        /// Escaped rendering of the key
        key: String,
        /// Expected marker
        expected: &'static str,
        /// Marker found in the key
        found: String,
    },

    /// Token output index is not a decimal u64
    #[error("key {key} has invalid output index '{index}'")]
    InvalidIndex {
        /// Escaped rendering of the key
        key: String,
        /// The index attribute as stored
        index: String,
    },

    /// Quantity text cannot be parsed at the requested precision
    #[error("invalid quantity '{text}': {reason}")]
    InvalidQuantity {
        /// The text that failed to parse
        text: String,
        /// Why it failed
        reason: String,
    },

    /// Two quantities with different precisions were combined
    #[error("precision mismatch: {left} vs {right}")]
    PrecisionMismatch {
        /// Precision of the left operand
        left: u32,
        /// Precision of the right operand
        right: u32,
    },
}

impl Error {
    /// Get a stable reason code for this error
    pub fn reason_code(&self) -> &'static str {
        match self {
            Error::InvalidAttribute { .. } => "invalid_attribute",
            Error::InvalidUtf8 { .. } => "invalid_utf8",
            Error::MalformedKey { .. } => "malformed_key",
            Error::WrongPrefix { .. } => "wrong_prefix",
            Error::WrongArity { .. } => "wrong_arity",
            Error::WrongMarker { .. } => "wrong_marker",
            Error::InvalidIndex { .. } => "invalid_index",
            Error::InvalidQuantity { .. } => "invalid_quantity",
            Error::PrecisionMismatch { .. } => "precision_mismatch",
        }
    }

    /// True for errors that indicate stored data does not match the key schema
    pub fn is_schema_violation(&self) -> bool {
        matches!(
            self,
            Error::MalformedKey { .. }
                | Error::WrongPrefix { .. }
                | Error::WrongArity { .. }
                | Error::WrongMarker { .. }
                | Error::InvalidIndex { .. }
        )
    }

    pub(crate) fn invalid_quantity(text: &str, reason: impl Into<String>) -> Self {
        Error::InvalidQuantity {
            text: text.to_string(),
            reason: reason.into(),
        }
    }
}

fn display_codepoint(c: &char) -> String {
    format!("U+{:04X}", *c as u32)
}

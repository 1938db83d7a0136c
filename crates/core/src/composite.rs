//! Composite state keys
//!
//! A composite key packs an object type and an ordered list of string
//! attributes into one flat byte string for a sorted key-value store:
//!
//! ```text
//! 0x00 <object type> 0x00 <attr 1> 0x00 ... <attr N> 0x00
//! ```
//!
//! ## Contract
//!
//! These framing rules are part of the stored format and are FROZEN:
//! - The key starts with the namespace byte `0x00`
//! - Every component is terminated by the delimiter byte `0x00`
//! - Attributes must not contain U+0000 (the delimiter) or U+10FFFF (the
//!   range-scan sentinel)
//! - All keys of one object type share the prefix `0x00 <object type> 0x00`,
//!   so a lexicographic range scan over that prefix returns exactly them
//!
//! Validation works on codepoints; splitting works on raw bytes. U+0000 is the
//! only codepoint whose UTF-8 encoding contains a `0x00` byte, so a delimiter
//! byte can never appear inside a validated multi-byte sequence.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Leading namespace byte of every composite key
pub const COMPOSITE_KEY_NAMESPACE: u8 = 0x00;

/// Byte terminating each component
pub const DELIMITER: u8 = 0x00;

/// Smallest codepoint; its encoding is the delimiter byte
pub const MIN_UNICODE_RUNE: char = '\u{0}';

/// Largest (and unallocated) codepoint, used as the upper bound of range scans
pub const MAX_UNICODE_RUNE: char = char::MAX;

/// Encoded composite key as stored in the state store
///
/// Ordering is plain bytewise ordering, which is the ordering of the
/// underlying store.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateKey(Vec<u8>);

impl StateKey {
    /// Wrap raw key bytes read back from a store
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Borrow the encoded bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the key, returning the encoded bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Length of the encoded key in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the key has no bytes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if this key starts with the given prefix key
    pub fn starts_with(&self, prefix: &StateKey) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Split this key back into its components
    ///
    /// See [`split`] for the meaning of `min_attributes`.
    pub fn split(&self, min_attributes: usize) -> Result<CompositeKey> {
        split(&self.0, min_attributes)
    }
}

impl AsRef<[u8]> for StateKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<StateKey> for Vec<u8> {
    fn from(key: StateKey) -> Self {
        key.0
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&escape_key(&self.0))
    }
}

impl fmt::Debug for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateKey(\"{}\")", escape_key(&self.0))
    }
}

/// Logical, decoded form of a composite key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompositeKey {
    /// Object type (first component)
    pub object_type: String,
    /// Attributes in key order
    pub attributes: Vec<String>,
}

impl CompositeKey {
    /// Create a composite key from its components
    pub fn new<S: Into<String>>(object_type: impl Into<String>, attributes: Vec<S>) -> Self {
        Self {
            object_type: object_type.into(),
            attributes: attributes.into_iter().map(Into::into).collect(),
        }
    }

    /// Encode into the stored byte form
    pub fn encode(&self) -> Result<StateKey> {
        build(&self.object_type, self.attributes.as_slice())
    }
}

/// Validate a single key component
///
/// Fails on the first occurrence of U+0000 or U+10FFFF, reporting the
/// codepoint and its byte position.
pub fn validate_attribute(attribute: &str) -> Result<()> {
    for (position, codepoint) in attribute.char_indices() {
        if codepoint == MIN_UNICODE_RUNE || codepoint == MAX_UNICODE_RUNE {
            return Err(Error::InvalidAttribute {
                codepoint,
                position,
            });
        }
    }
    Ok(())
}

/// Validate a key component given as raw bytes
///
/// Checks UTF-8 validity first, then applies [`validate_attribute`].
pub fn validate_attribute_bytes(attribute: &[u8]) -> Result<&str> {
    let text = std::str::from_utf8(attribute).map_err(|e| Error::InvalidUtf8 {
        position: e.valid_up_to(),
    })?;
    validate_attribute(text)?;
    Ok(text)
}

/// Build a composite key
///
/// Validates the object type and then each attribute in order; the first
/// violation is returned and no partial key is produced.
pub fn build<S: AsRef<str>>(object_type: &str, attributes: &[S]) -> Result<StateKey> {
    validate_attribute(object_type)?;
    for attribute in attributes {
        validate_attribute(attribute.as_ref())?;
    }

    let len = 2
        + object_type.len()
        + attributes
            .iter()
            .map(|a| a.as_ref().len() + 1)
            .sum::<usize>();
    let mut key = Vec::with_capacity(len);
    key.push(COMPOSITE_KEY_NAMESPACE);
    key.extend_from_slice(object_type.as_bytes());
    key.push(DELIMITER);
    for attribute in attributes {
        key.extend_from_slice(attribute.as_ref().as_bytes());
        key.push(DELIMITER);
    }
    Ok(StateKey(key))
}

/// Split a composite key into object type and attributes
///
/// Scans bytes from offset 1, cutting at every delimiter byte. The caller
/// states how many attributes it needs at minimum (the object type is
/// counted separately): a setup key legitimately has one attribute, a token
/// output key two.
///
/// Fails with [`Error::MalformedKey`] if the key does not start with the
/// namespace byte, has bytes after its last delimiter, or has fewer than
/// `min_attributes` attributes.
pub fn split(key: &[u8], min_attributes: usize) -> Result<CompositeKey> {
    let required = min_attributes + 1;
    if key.first() != Some(&COMPOSITE_KEY_NAMESPACE) {
        return Err(malformed(key, 0, required));
    }

    let mut components = Vec::new();
    let mut start = 1;
    for (i, byte) in key.iter().enumerate().skip(1) {
        if *byte == DELIMITER {
            components.push(&key[start..i]);
            start = i + 1;
        }
    }

    if start != key.len() || components.len() < required {
        return Err(malformed(key, components.len(), required));
    }

    let mut offset = 1;
    let mut decoded = Vec::with_capacity(components.len());
    for component in components {
        let text = std::str::from_utf8(component).map_err(|e| Error::InvalidUtf8 {
            position: offset + e.valid_up_to(),
        })?;
        decoded.push(text.to_string());
        offset += component.len() + 1;
    }

    let mut decoded = decoded.into_iter();
    let object_type = decoded.next().unwrap_or_default();
    Ok(CompositeKey {
        object_type,
        attributes: decoded.collect(),
    })
}

/// Key range covering every key that extends a partial composite key
///
/// Returns `(start, end)` where `start` is the encoded partial key and `end`
/// is `start` followed by the UTF-8 encoding of U+10FFFF. Any full key built
/// from the same object type and leading attributes sorts in `[start, end)`.
pub fn prefix_range<S: AsRef<str>>(
    object_type: &str,
    partial_attributes: &[S],
) -> Result<(StateKey, StateKey)> {
    let start = build(object_type, partial_attributes)?;
    let mut end = start.0.clone();
    let mut sentinel = [0u8; 4];
    end.extend_from_slice(MAX_UNICODE_RUNE.encode_utf8(&mut sentinel).as_bytes());
    Ok((start, StateKey(end)))
}

/// Render key bytes for diagnostics, escaping delimiters and non-printables
pub fn escape_key(key: &[u8]) -> String {
    let mut out = String::with_capacity(key.len() + 8);
    for &byte in key {
        match byte {
            0x00 => out.push_str("\\0"),
            b'\\' => out.push_str("\\\\"),
            b' '..=b'~' => out.push(byte as char),
            _ => out.push_str(&format!("\\x{:02x}", byte)),
        }
    }
    out
}

fn malformed(key: &[u8], found: usize, required: usize) -> Error {
    Error::MalformedKey {
        key: escape_key(key),
        found,
        required,
    }
}

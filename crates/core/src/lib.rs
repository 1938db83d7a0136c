//! Core types for tokenstate
//!
//! This crate defines how token ledger entities are addressed in a sorted
//! key-value state store and how token quantities are represented:
//! - Composite keys: delimiter-framed byte keys (object type + attributes)
//! - Key shapes: the one table of object types, markers and attribute counts
//! - Key catalog: named constructors and parsers for every ledger entity
//! - Quantity: exact, non-negative, fixed-precision decimal values
//! - Error: error type shared by all of the above
//!
//! Everything here is pure and synchronous; values are created per call and
//! are safe to share across threads.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod composite;
pub mod error;
pub mod quantity;
pub mod shape;

pub use catalog::{
    issue_action_metadata_key, parse_token_output_key, parse_transfer_metadata_sub_key,
    serial_number_key, setup_hash_key, setup_key, token_output_key, token_request_key,
    transfer_action_metadata_key, KeyTranslator, LedgerKey, TokenId, TokenKeys,
};
pub use composite::{
    build, prefix_range, split, validate_attribute, validate_attribute_bytes, CompositeKey,
    StateKey,
};
pub use error::{Error, Result};
pub use quantity::Quantity;
pub use shape::{KeyKind, KeyShape, KEY_SHAPES, TOKEN_KEY_PREFIX};

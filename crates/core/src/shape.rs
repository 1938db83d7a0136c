//! Key shapes of the token namespace
//!
//! Every ledger entity addressed in the state store has a fixed key shape:
//! an object type, an optional marker attribute, and a fixed number of
//! attributes. [`KEY_SHAPES`] is the single table of those shapes; the
//! catalog builds and parses keys only through it.
//!
//! All shapes share the object type [`TOKEN_KEY_PREFIX`], so the whole token
//! namespace is one contiguous range in the store.
//!
//! ## Contract
//!
//! The constants below are part of the stored format and MUST NOT change.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Object type shared by every token key
pub const TOKEN_KEY_PREFIX: &str = "ztoken";
/// Marker of the public-parameters setup key
pub const SETUP_MARKER: &str = "setup";
/// Marker of the public-parameters hash key
pub const SETUP_HASH_MARKER: &str = "setup.hash";
/// Marker of token request keys
pub const TOKEN_REQUEST_MARKER: &str = "token_request";
/// Marker of serial number keys
pub const SERIAL_NUMBER_MARKER: &str = "sn";
/// Marker of issue action metadata keys
pub const ISSUE_ACTION_METADATA_MARKER: &str = "iam";
/// Marker of transfer action metadata keys
pub const TRANSFER_ACTION_METADATA_MARKER: &str = "tam";

/// Kind of ledger entity a key addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyKind {
    /// Output of a token transaction: `[txID, index]`
    TokenOutput,
    /// Spent serial number: `["sn", sn]`
    SerialNumber,
    /// Public parameters: `["setup"]`
    Setup,
    /// Hash of the public parameters: `["setup.hash"]`
    SetupHash,
    /// Token request of a transaction: `["token_request", txID]`
    TokenRequest,
    /// Issue action metadata: `["iam", hash]`
    IssueActionMetadata,
    /// Transfer action metadata: `["tam", subKey]`
    TransferActionMetadata,
}

impl KeyKind {
    /// All kinds, in table order
    pub const ALL: [KeyKind; 7] = [
        KeyKind::TokenOutput,
        KeyKind::SerialNumber,
        KeyKind::Setup,
        KeyKind::SetupHash,
        KeyKind::TokenRequest,
        KeyKind::IssueActionMetadata,
        KeyKind::TransferActionMetadata,
    ];

    /// The shape row for this kind
    pub fn shape(self) -> &'static KeyShape {
        // KEY_SHAPES is indexed by discriminant; see test_table_order_matches_kinds
        &KEY_SHAPES[self as usize]
    }

    /// Stable name used in logs and reason strings
    pub fn as_str(self) -> &'static str {
        match self {
            KeyKind::TokenOutput => "token_output",
            KeyKind::SerialNumber => "serial_number",
            KeyKind::Setup => "setup",
            KeyKind::SetupHash => "setup_hash",
            KeyKind::TokenRequest => "token_request",
            KeyKind::IssueActionMetadata => "issue_action_metadata",
            KeyKind::TransferActionMetadata => "transfer_action_metadata",
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed shape of one kind of key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyShape {
    /// Kind this row describes
    pub kind: KeyKind,
    /// Object type (first component)
    pub object_type: &'static str,
    /// Leading marker attribute, if the shape has one
    pub marker: Option<&'static str>,
    /// Total attribute count, marker included
    pub attributes: usize,
}

impl KeyShape {
    /// Attributes after the marker
    pub fn payload_attributes(&self) -> usize {
        self.attributes - usize::from(self.marker.is_some())
    }

    /// Find the shape whose marker matches, for keys of `attributes` attributes
    pub fn for_marker(marker: &str, attributes: usize) -> Option<&'static KeyShape> {
        KEY_SHAPES
            .iter()
            .find(|s| s.marker == Some(marker) && s.attributes == attributes)
    }
}

/// Every key shape of the token namespace
pub static KEY_SHAPES: [KeyShape; 7] = [
    KeyShape {
        kind: KeyKind::TokenOutput,
        object_type: TOKEN_KEY_PREFIX,
        marker: None,
        attributes: 2,
    },
    KeyShape {
        kind: KeyKind::SerialNumber,
        object_type: TOKEN_KEY_PREFIX,
        marker: Some(SERIAL_NUMBER_MARKER),
        attributes: 2,
    },
    KeyShape {
        kind: KeyKind::Setup,
        object_type: TOKEN_KEY_PREFIX,
        marker: Some(SETUP_MARKER),
        attributes: 1,
    },
    KeyShape {
        kind: KeyKind::SetupHash,
        object_type: TOKEN_KEY_PREFIX,
        marker: Some(SETUP_HASH_MARKER),
        attributes: 1,
    },
    KeyShape {
        kind: KeyKind::TokenRequest,
        object_type: TOKEN_KEY_PREFIX,
        marker: Some(TOKEN_REQUEST_MARKER),
        attributes: 2,
    },
    KeyShape {
        kind: KeyKind::IssueActionMetadata,
        object_type: TOKEN_KEY_PREFIX,
        marker: Some(ISSUE_ACTION_METADATA_MARKER),
        attributes: 2,
    },
    KeyShape {
        kind: KeyKind::TransferActionMetadata,
        object_type: TOKEN_KEY_PREFIX,
        marker: Some(TRANSFER_ACTION_METADATA_MARKER),
        attributes: 2,
    },
];

//! Key catalog for the token namespace
//!
//! Named constructors for every ledger entity stored under the token
//! namespace, plus the parsers that read them back. Keys are built only from
//! the rows of [`KEY_SHAPES`](crate::shape::KEY_SHAPES), so constructors and
//! parsers cannot drift apart.
//!
//! Callers that need to substitute key construction (tests, alternative
//! layouts) go through the [`KeyTranslator`] trait; [`TokenKeys`] is the
//! implementation used everywhere else.

use crate::composite::{build, escape_key, split, CompositeKey, StateKey};
use crate::error::{Error, Result};
use crate::shape::{KeyKind, KeyShape, TOKEN_KEY_PREFIX};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a token: the transaction that created it and the output index
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenId {
    /// Transaction ID
    pub tx_id: String,
    /// Output index inside the transaction
    pub index: u64,
}

impl TokenId {
    /// Create a token identifier
    pub fn new(tx_id: impl Into<String>, index: u64) -> Self {
        Self {
            tx_id: tx_id.into(),
            index,
        }
    }

    /// State key of the output this identifier points to
    pub fn state_key(&self) -> Result<StateKey> {
        token_output_key(&self.tx_id, self.index)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.tx_id, self.index)
    }
}

fn shaped(kind: KeyKind, payload: &[&str]) -> Result<StateKey> {
    let shape = kind.shape();
    let mut attributes = Vec::with_capacity(shape.attributes);
    if let Some(marker) = shape.marker {
        attributes.push(marker);
    }
    attributes.extend_from_slice(payload);
    debug_assert_eq!(attributes.len(), shape.attributes);
    build(shape.object_type, attributes.as_slice())
}

/// Key of output `index` of transaction `tx_id`
pub fn token_output_key(tx_id: &str, index: u64) -> Result<StateKey> {
    let index = index.to_string();
    shaped(KeyKind::TokenOutput, &[tx_id, &index])
}

/// Key recording a spent serial number
pub fn serial_number_key(sn: &str) -> Result<StateKey> {
    shaped(KeyKind::SerialNumber, &[sn])
}

/// Key of the public parameters
pub fn setup_key() -> Result<StateKey> {
    shaped(KeyKind::Setup, &[])
}

/// Key of the public parameters hash
pub fn setup_hash_key() -> Result<StateKey> {
    shaped(KeyKind::SetupHash, &[])
}

/// Key of the token request of transaction `tx_id`
pub fn token_request_key(tx_id: &str) -> Result<StateKey> {
    shaped(KeyKind::TokenRequest, &[tx_id])
}

/// Key of issue action metadata identified by `hash`
pub fn issue_action_metadata_key(hash: &str) -> Result<StateKey> {
    shaped(KeyKind::IssueActionMetadata, &[hash])
}

/// Key of transfer action metadata identified by `sub_key`
///
/// The sub key is chosen by the caller to be unique within the token
/// request the metadata belongs to.
pub fn transfer_action_metadata_key(sub_key: &str) -> Result<StateKey> {
    shaped(KeyKind::TransferActionMetadata, &[sub_key])
}

fn expect_shape(key: &[u8], shape: &KeyShape, parsed: &CompositeKey) -> Result<()> {
    if parsed.object_type != shape.object_type {
        return Err(Error::WrongPrefix {
            key: escape_key(key),
            expected: shape.object_type,
            found: parsed.object_type.clone(),
        });
    }
    if parsed.attributes.len() != shape.attributes {
        return Err(Error::WrongArity {
            key: escape_key(key),
            expected: shape.attributes,
            found: parsed.attributes.len(),
        });
    }
    if let Some(marker) = shape.marker {
        if parsed.attributes[0] != marker {
            return Err(Error::WrongMarker {
                key: escape_key(key),
                expected: marker,
                found: parsed.attributes[0].clone(),
            });
        }
    }
    Ok(())
}

/// Extract the sub key from a transfer action metadata key
///
/// Checks, in order: object type, attribute count, marker.
pub fn parse_transfer_metadata_sub_key(key: &[u8]) -> Result<String> {
    let parsed = split(key, 0)?;
    expect_shape(key, KeyKind::TransferActionMetadata.shape(), &parsed)?;
    let CompositeKey { mut attributes, .. } = parsed;
    Ok(attributes.swap_remove(1))
}

/// Parse a token output key back into its identifier
///
/// The index must be in the canonical decimal form produced by
/// [`token_output_key`].
pub fn parse_token_output_key(key: &[u8]) -> Result<TokenId> {
    let shape = KeyKind::TokenOutput.shape();
    let parsed = split(key, shape.attributes)?;
    expect_shape(key, shape, &parsed)?;
    token_id_from_attributes(key, parsed.attributes)
}

fn token_id_from_attributes(key: &[u8], mut attributes: Vec<String>) -> Result<TokenId> {
    let index_text = attributes.pop().unwrap_or_default();
    let tx_id = attributes.pop().unwrap_or_default();
    let index = parse_canonical_index(&index_text).ok_or_else(|| Error::InvalidIndex {
        key: escape_key(key),
        index: index_text.clone(),
    })?;
    Ok(TokenId { tx_id, index })
}

fn parse_canonical_index(text: &str) -> Option<u64> {
    let canonical = !text.is_empty()
        && text.bytes().all(|b| b.is_ascii_digit())
        && (text == "0" || !text.starts_with('0'));
    if !canonical {
        return None;
    }
    text.parse().ok()
}

/// A decoded key of the token namespace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LedgerKey {
    /// Token output
    TokenOutput(TokenId),
    /// Spent serial number
    SerialNumber(String),
    /// Public parameters
    Setup,
    /// Public parameters hash
    SetupHash,
    /// Token request of a transaction
    TokenRequest(String),
    /// Issue action metadata
    IssueActionMetadata(String),
    /// Transfer action metadata
    TransferActionMetadata(String),
}

impl LedgerKey {
    /// Classify a stored key
    ///
    /// A key whose first attribute is a known marker and whose length matches
    /// that marker's shape decodes to that shape; any other two-attribute key
    /// is a token output.
    pub fn parse(key: &[u8]) -> Result<Self> {
        let parsed = split(key, 1)?;
        if parsed.object_type != TOKEN_KEY_PREFIX {
            return Err(Error::WrongPrefix {
                key: escape_key(key),
                expected: TOKEN_KEY_PREFIX,
                found: parsed.object_type,
            });
        }

        let count = parsed.attributes.len();
        let mut attributes = parsed.attributes;
        match KeyShape::for_marker(&attributes[0], count).map(|s| s.kind) {
            Some(KeyKind::Setup) => Ok(LedgerKey::Setup),
            Some(KeyKind::SetupHash) => Ok(LedgerKey::SetupHash),
            Some(KeyKind::SerialNumber) => Ok(LedgerKey::SerialNumber(attributes.swap_remove(1))),
            Some(KeyKind::TokenRequest) => Ok(LedgerKey::TokenRequest(attributes.swap_remove(1))),
            Some(KeyKind::IssueActionMetadata) => {
                Ok(LedgerKey::IssueActionMetadata(attributes.swap_remove(1)))
            }
            Some(KeyKind::TransferActionMetadata) => {
                Ok(LedgerKey::TransferActionMetadata(attributes.swap_remove(1)))
            }
            Some(KeyKind::TokenOutput) | None => {
                let expected = KeyKind::TokenOutput.shape().attributes;
                if count != expected {
                    return Err(Error::WrongArity {
                        key: escape_key(key),
                        expected,
                        found: count,
                    });
                }
                token_id_from_attributes(key, attributes).map(LedgerKey::TokenOutput)
            }
        }
    }

    /// Kind of entity this key addresses
    pub fn kind(&self) -> KeyKind {
        match self {
            LedgerKey::TokenOutput(_) => KeyKind::TokenOutput,
            LedgerKey::SerialNumber(_) => KeyKind::SerialNumber,
            LedgerKey::Setup => KeyKind::Setup,
            LedgerKey::SetupHash => KeyKind::SetupHash,
            LedgerKey::TokenRequest(_) => KeyKind::TokenRequest,
            LedgerKey::IssueActionMetadata(_) => KeyKind::IssueActionMetadata,
            LedgerKey::TransferActionMetadata(_) => KeyKind::TransferActionMetadata,
        }
    }

    /// Encode back into a state key
    pub fn to_state_key(&self) -> Result<StateKey> {
        match self {
            LedgerKey::TokenOutput(id) => id.state_key(),
            LedgerKey::SerialNumber(sn) => serial_number_key(sn),
            LedgerKey::Setup => setup_key(),
            LedgerKey::SetupHash => setup_hash_key(),
            LedgerKey::TokenRequest(tx_id) => token_request_key(tx_id),
            LedgerKey::IssueActionMetadata(hash) => issue_action_metadata_key(hash),
            LedgerKey::TransferActionMetadata(sub_key) => transfer_action_metadata_key(sub_key),
        }
    }
}

/// Capability interface over the key catalog
///
/// # Thread Safety
///
/// Translators must be `Send + Sync`; they are shared by every component that
/// addresses the state store.
pub trait KeyTranslator: Send + Sync {
    /// See [`token_request_key`]
    fn token_request_key(&self, tx_id: &str) -> Result<StateKey>;

    /// See [`setup_key`]
    fn setup_key(&self) -> Result<StateKey>;

    /// See [`setup_hash_key`]
    fn setup_hash_key(&self) -> Result<StateKey>;

    /// See [`token_output_key`]
    fn token_output_key(&self, tx_id: &str, index: u64) -> Result<StateKey>;

    /// See [`serial_number_key`]
    fn serial_number_key(&self, sn: &str) -> Result<StateKey>;

    /// See [`issue_action_metadata_key`]
    fn issue_action_metadata_key(&self, hash: &str) -> Result<StateKey>;

    /// See [`transfer_action_metadata_key`]
    fn transfer_action_metadata_key(&self, sub_key: &str) -> Result<StateKey>;

    /// See [`parse_transfer_metadata_sub_key`]
    fn transfer_metadata_sub_key(&self, key: &[u8]) -> Result<String>;

    /// See [`parse_token_output_key`]
    fn token_output_id(&self, key: &[u8]) -> Result<TokenId>;

    /// See [`LedgerKey::parse`]
    fn ledger_key(&self, key: &[u8]) -> Result<LedgerKey>;
}

/// The key catalog of the token namespace
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenKeys;

impl KeyTranslator for TokenKeys {
    fn token_request_key(&self, tx_id: &str) -> Result<StateKey> {
        token_request_key(tx_id)
    }

    fn setup_key(&self) -> Result<StateKey> {
        setup_key()
    }

    fn setup_hash_key(&self) -> Result<StateKey> {
        setup_hash_key()
    }

    fn token_output_key(&self, tx_id: &str, index: u64) -> Result<StateKey> {
        token_output_key(tx_id, index)
    }

    fn serial_number_key(&self, sn: &str) -> Result<StateKey> {
        serial_number_key(sn)
    }

    fn issue_action_metadata_key(&self, hash: &str) -> Result<StateKey> {
        issue_action_metadata_key(hash)
    }

    fn transfer_action_metadata_key(&self, sub_key: &str) -> Result<StateKey> {
        transfer_action_metadata_key(sub_key)
    }

    fn transfer_metadata_sub_key(&self, key: &[u8]) -> Result<String> {
        parse_transfer_metadata_sub_key(key)
    }

    fn token_output_id(&self, key: &[u8]) -> Result<TokenId> {
        parse_token_output_key(key)
    }

    fn ledger_key(&self, key: &[u8]) -> Result<LedgerKey> {
        LedgerKey::parse(key)
    }
}

//! Balance query and result types
//!
//! Field names on the wire follow the ledger's JSON convention
//! (`{"Wallet": ..., "Type": ...}` in, `{"Type": ..., "Quantity": ...}` out).

use crate::error::Result;
use serde::{Deserialize, Serialize};
use tokenstate_core::TokenId;

/// An unspent token output as reported by a wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnspentToken {
    /// Output identifier
    #[serde(rename = "Id")]
    pub id: TokenId,
    /// Owner identity, opaque to this crate
    #[serde(rename = "Owner", default)]
    pub owner: Vec<u8>,
    /// Token type label
    #[serde(rename = "Type")]
    pub token_type: String,
    /// Quantity as decimal text
    #[serde(rename = "Quantity")]
    pub quantity: String,
}

impl UnspentToken {
    /// Create an unspent token record with no owner
    pub fn new(id: TokenId, token_type: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            id,
            owner: Vec::new(),
            token_type: token_type.into(),
            quantity: quantity.into(),
        }
    }
}

/// Balance of one token type in one wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Token type label
    #[serde(rename = "Type")]
    pub token_type: String,
    /// Canonical decimal text with exactly `precision` fractional digits
    #[serde(rename = "Quantity")]
    pub quantity: String,
}

/// Request for the balance of one token type in one wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceQuery {
    /// Owner wallet identifier
    #[serde(rename = "Wallet")]
    pub wallet: String,
    /// Token type label
    #[serde(rename = "Type")]
    pub token_type: String,
}

impl BalanceQuery {
    /// Create a query
    pub fn new(wallet: impl Into<String>, token_type: impl Into<String>) -> Self {
        Self {
            wallet: wallet.into(),
            token_type: token_type.into(),
        }
    }

    /// Decode a query from its JSON payload
    pub fn from_json(input: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(input)?)
    }
}

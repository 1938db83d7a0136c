//! tokenstate - state keys and balances for token ledgers
//!
//! tokenstate addresses token ledger entities in a sorted key-value state
//! store and computes wallet balances from unspent token outputs.
//!
//! # Quick Start
//!
//! ```
//! use tokenstate::{aggregate, token_output_key, TokenId, UnspentToken};
//!
//! // Address output 3 of transaction "tx1"
//! let key = token_output_key("tx1", 3)?;
//! assert_eq!(key.as_bytes(), b"\x00ztoken\x00tx1\x003\x00");
//!
//! // Sum unspent quantities at precision 2
//! let tokens = vec![
//!     UnspentToken::new(TokenId::new("tx1", 0), "USD", "5.00"),
//!     UnspentToken::new(TokenId::new("tx1", 1), "USD", "2.5"),
//! ];
//! let balance = aggregate("USD", &tokens, 2)?;
//! assert_eq!(balance.quantity, "7.50");
//! # Ok::<(), tokenstate::Error>(())
//! ```
//!
//! # Architecture
//!
//! - [`tokenstate_core`]: composite key codec, key catalog, quantities
//! - [`tokenstate_balance`]: balance aggregation and query service

pub use tokenstate_balance::{
    aggregate, Balance, BalanceError, BalanceQuery, BalanceService, OwnerWallet,
    PublicParametersProvider, PublicParamsConfig, UnspentToken, WalletManager,
};
pub use tokenstate_core::{
    build, issue_action_metadata_key, parse_token_output_key, parse_transfer_metadata_sub_key,
    prefix_range, serial_number_key, setup_hash_key, setup_key, split, token_output_key,
    token_request_key, transfer_action_metadata_key, validate_attribute,
    validate_attribute_bytes, CompositeKey, Error, KeyKind, KeyShape, KeyTranslator, LedgerKey,
    Quantity, Result, StateKey, TokenId, TokenKeys, KEY_SHAPES, TOKEN_KEY_PREFIX,
};

//! Wallet balances for tokenstate
//!
//! Computes the balance of one token type in one wallet by summing the
//! quantities of its unspent tokens at the ledger precision:
//! - Aggregator: exact, all-or-nothing sum of quantity texts
//! - Service: wallet resolution, enumeration and precision lookup
//! - Traits: the external collaborators (wallets, public parameters)
//! - Config: file-backed public parameters (`tokenstate.toml`)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aggregator;
pub mod config;
pub mod error;
pub mod service;
pub mod traits;
pub mod types;

pub use aggregator::aggregate;
pub use config::{PublicParamsConfig, CONFIG_FILE_NAME, MAX_PRECISION};
pub use error::{BalanceError, Result};
pub use service::BalanceService;
pub use traits::{OwnerWallet, PublicParametersProvider, WalletManager};
pub use types::{Balance, BalanceQuery, UnspentToken};

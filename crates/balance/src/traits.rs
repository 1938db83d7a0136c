//! Collaborator traits
//!
//! Wallet lookup, token enumeration and public parameters live outside this
//! crate. Implementations may block on I/O; the aggregator itself never does.
//!
//! # Thread Safety
//!
//! All collaborators must be `Send + Sync` so one [`BalanceService`] can serve
//! queries from many threads.
//!
//! [`BalanceService`]: crate::BalanceService

use crate::error::Result;
use crate::types::UnspentToken;
use std::sync::Arc;

/// A wallet owning tokens
pub trait OwnerWallet: Send + Sync {
    /// Unspent tokens of `token_type` owned by this wallet
    ///
    /// The list must be free of duplicates; its order is not significant.
    fn list_unspent_tokens(&self, token_type: &str) -> Result<Vec<UnspentToken>>;
}

/// Resolves owner wallets by identifier
pub trait WalletManager: Send + Sync {
    /// The owner wallet with this identifier, or `None` if there is none
    fn owner_wallet(&self, id: &str) -> Option<Arc<dyn OwnerWallet>>;
}

/// Source of the ledger's current public parameters
pub trait PublicParametersProvider: Send + Sync {
    /// Fractional digits of token quantities
    fn precision(&self) -> Result<u32>;
}

//! Balance query service
//!
//! Resolves the owner wallet, enumerates its unspent tokens of the requested
//! type, reads the precision from the public parameters and aggregates.

use crate::aggregator::aggregate;
use crate::config::MAX_PRECISION;
use crate::error::{BalanceError, Result};
use crate::traits::{PublicParametersProvider, WalletManager};
use crate::types::{Balance, BalanceQuery};
use std::sync::Arc;
use tracing::{debug, warn};

/// Answers balance queries against external wallets and parameters
#[derive(Clone)]
pub struct BalanceService {
    wallets: Arc<dyn WalletManager>,
    params: Arc<dyn PublicParametersProvider>,
}

impl BalanceService {
    /// Create a service over the given collaborators
    pub fn new(
        wallets: Arc<dyn WalletManager>,
        params: Arc<dyn PublicParametersProvider>,
    ) -> Self {
        Self { wallets, params }
    }

    /// Balance of `query.token_type` in `query.wallet`
    ///
    /// Fails with [`BalanceError::Parameters`] if the provider reports a
    /// precision above [`MAX_PRECISION`].
    pub fn balance(&self, query: &BalanceQuery) -> Result<Balance> {
        debug!(
            target: "tokenstate::balance",
            wallet = %query.wallet,
            token_type = %query.token_type,
            "start_balance_query"
        );

        let wallet = self.wallets.owner_wallet(&query.wallet).ok_or_else(|| {
            BalanceError::WalletNotFound {
                wallet: query.wallet.clone(),
            }
        })?;

        debug!(target: "tokenstate::balance", "list_unspent_tokens");
        let tokens = wallet.list_unspent_tokens(&query.token_type)?;
        let precision = self.params.precision()?;
        if precision > MAX_PRECISION {
            return Err(BalanceError::Parameters(format!(
                "precision {} exceeds maximum {}",
                precision, MAX_PRECISION
            )));
        }

        debug!(
            target: "tokenstate::balance",
            tokens = tokens.len(),
            precision,
            "start_sum_calculation"
        );
        let balance = aggregate(&query.token_type, &tokens, precision).map_err(|e| {
            warn!(
                target: "tokenstate::balance",
                wallet = %query.wallet,
                error = %e,
                "Balance aggregation failed"
            );
            BalanceError::from(e)
        })?;

        debug!(
            target: "tokenstate::balance",
            quantity = %balance.quantity,
            "end_sum_calculation"
        );
        Ok(balance)
    }

    /// Decode a JSON query and answer it
    pub fn balance_json(&self, input: &[u8]) -> Result<Balance> {
        let query = BalanceQuery::from_json(input)?;
        self.balance(&query)
    }
}

//! Shared test utilities for all integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from any test's main.rs.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;
use std::sync::{Arc, Once};

use tokenstate::{
    BalanceError, BalanceService, OwnerWallet, PublicParamsConfig, StateKey, TokenId,
    UnspentToken, WalletManager,
};

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();

/// Install a test-writer tracing subscriber once per test binary.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Sorted state store
// ============================================================================

/// Minimal sorted key-value store: exact get plus half-open range scan.
#[derive(Default)]
pub struct MemoryStateStore {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, key: &StateKey, value: &[u8]) {
        self.entries.insert(key.as_bytes().to_vec(), value.to_vec());
    }

    pub fn get(&self, key: &StateKey) -> Option<&[u8]> {
        self.entries.get(key.as_bytes()).map(Vec::as_slice)
    }

    /// Keys in `[start, end)`, in store order.
    pub fn scan(&self, start: &StateKey, end: &StateKey) -> Vec<StateKey> {
        self.entries
            .range::<[u8], _>((
                Bound::Included(start.as_bytes()),
                Bound::Excluded(end.as_bytes()),
            ))
            .map(|(k, _)| StateKey::from_bytes(k.clone()))
            .collect()
    }

    /// Keys starting with `prefix`, in store order.
    pub fn scan_prefix(&self, prefix: &StateKey) -> Vec<StateKey> {
        self.entries
            .range::<[u8], _>((Bound::Included(prefix.as_bytes()), Bound::Unbounded))
            .take_while(|(k, _)| k.starts_with(prefix.as_bytes()))
            .map(|(k, _)| StateKey::from_bytes(k.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

// ============================================================================
// Wallet fakes
// ============================================================================

/// Wallet returning a fixed token list, filtered by type.
pub struct FixedWallet {
    tokens: Vec<UnspentToken>,
}

impl FixedWallet {
    pub fn new(tokens: Vec<UnspentToken>) -> Self {
        Self { tokens }
    }
}

impl OwnerWallet for FixedWallet {
    fn list_unspent_tokens(&self, token_type: &str) -> Result<Vec<UnspentToken>, BalanceError> {
        Ok(self
            .tokens
            .iter()
            .filter(|t| t.token_type == token_type)
            .cloned()
            .collect())
    }
}

/// Wallet registry keyed by wallet id.
#[derive(Default)]
pub struct WalletRegistry {
    wallets: HashMap<String, Arc<dyn OwnerWallet>>,
}

impl WalletRegistry {
    pub fn with(mut self, id: &str, wallet: impl OwnerWallet + 'static) -> Self {
        self.wallets.insert(id.to_string(), Arc::new(wallet));
        self
    }
}

impl WalletManager for WalletRegistry {
    fn owner_wallet(&self, id: &str) -> Option<Arc<dyn OwnerWallet>> {
        self.wallets.get(id).cloned()
    }
}

/// Service over `registry` at `precision`.
pub fn service(registry: WalletRegistry, precision: u32) -> BalanceService {
    BalanceService::new(
        Arc::new(registry),
        Arc::new(PublicParamsConfig { precision }),
    )
}

/// Unspent tokens of one type from one transaction, one per quantity.
pub fn usd_tokens(tx_id: &str, quantities: &[&str]) -> Vec<UnspentToken> {
    typed_tokens(tx_id, "USD", quantities)
}

pub fn typed_tokens(tx_id: &str, token_type: &str, quantities: &[&str]) -> Vec<UnspentToken> {
    quantities
        .iter()
        .enumerate()
        .map(|(i, q)| UnspentToken::new(TokenId::new(tx_id, i as u64), token_type, *q))
        .collect()
}

pub fn is_wallet_not_found(err: &BalanceError) -> bool {
    matches!(err, BalanceError::WalletNotFound { .. })
}

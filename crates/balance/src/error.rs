//! Error types for balance queries

use thiserror::Error;

/// Result type alias for balance operations
pub type Result<T> = std::result::Result<T, BalanceError>;

/// Errors raised while answering a balance query
///
/// No variant is retried internally: a missing wallet stays missing, and a
/// quantity that fails to parse fails the whole query.
#[derive(Debug, Error)]
pub enum BalanceError {
    /// No owner wallet with this identifier
    #[error("wallet {wallet} not found")]
    WalletNotFound {
        /// Requested wallet identifier
        wallet: String,
    },

    /// The token enumerator failed
    #[error("failed to list unspent tokens: {0}")]
    Enumeration(String),

    /// The public parameters could not be read
    #[error("public parameters unavailable: {0}")]
    Parameters(String),

    /// The query payload could not be decoded
    #[error("invalid balance query: {0}")]
    Query(#[from] serde_json::Error),

    /// Configuration file could not be read, parsed or written
    #[error("configuration error: {0}")]
    Config(String),

    /// Key or quantity error from the core
    #[error(transparent)]
    Core(#[from] tokenstate_core::Error),
}

impl BalanceError {
    /// Get a stable reason code for this error
    pub fn reason_code(&self) -> &'static str {
        match self {
            BalanceError::WalletNotFound { .. } => "wallet_not_found",
            BalanceError::Enumeration(_) => "enumeration_failed",
            BalanceError::Parameters(_) => "parameters_unavailable",
            BalanceError::Query(_) => "invalid_query",
            BalanceError::Config(_) => "config_error",
            BalanceError::Core(e) => e.reason_code(),
        }
    }
}

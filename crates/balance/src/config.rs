//! Public parameters configuration via `tokenstate.toml`
//!
//! A file-backed [`PublicParametersProvider`] for deployments (and tests)
//! that pin the ledger precision instead of fetching it from the network.
//! On first use a default `tokenstate.toml` can be written; to change the
//! precision, edit the file and restart.

use crate::error::{BalanceError, Result};
use crate::traits::PublicParametersProvider;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "tokenstate.toml";

/// Largest supported precision
pub const MAX_PRECISION: u32 = 64;

fn default_precision() -> u32 {
    2
}

/// Public parameters loaded from `tokenstate.toml`.
///
/// # Example
///
/// ```toml
/// # Fractional digits of token quantities (default: 2, max: 64)
/// precision = 2
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicParamsConfig {
    /// Fractional digits of token quantities
    #[serde(default = "default_precision")]
    pub precision: u32,
}

impl Default for PublicParamsConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

impl PublicParamsConfig {
    /// Check the configured values.
    ///
    /// # Errors
    ///
    /// Returns an error if `precision` exceeds [`MAX_PRECISION`].
    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(BalanceError::Config(format!(
                "precision {} exceeds maximum {}",
                self.precision, MAX_PRECISION
            )));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# tokenstate public parameters
#
# Fractional digits of token quantities (default: 2, max: 64).
# Every quantity is rendered with exactly this many digits after the point.
precision = 2
"#
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PublicParamsConfig = toml::from_str(content)
            .map_err(|e| BalanceError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BalanceError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            BalanceError::Config(msg) => {
                BalanceError::Config(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                BalanceError::Config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Load `tokenstate.toml` from `dir`, writing the default file first
    /// if none exists.
    pub fn load_or_init(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        Self::write_default_if_missing(&path)?;
        Self::from_file(&path)
    }
}

impl PublicParametersProvider for PublicParamsConfig {
    fn precision(&self) -> Result<u32> {
        Ok(self.precision)
    }
}

use alloy_primitives::Address;
use ::config::{NetworkConfig, NetworkConfigBuilder};
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

/// Invalid answers accepted per prompt before the action is cancelled.
pub const DEFAULT_MAX_INPUT_ATTEMPTS: u32 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("token address is not configured; set `token_address` or pass --token")]
    TokenNotConfigured,
}

/// Console configuration.
///
/// Every field is optional; unset fields fall back to the Sepolia defaults of
/// the `config` crate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// RPC endpoint url
    pub rpc_url: Option<String>,

    /// Token contract address
    pub token_address: Option<Address>,

    /// Chain the RPC endpoint is expected to serve
    pub chain_id: Option<u64>,

    /// Seconds to wait for a receipt before reporting the transaction as failed
    pub receipt_timeout_secs: Option<u64>,

    /// Invalid answers accepted per prompt
    pub max_input_attempts: Option<u32>,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents)?;

        Ok(config)
    }

    /// Network parameters with this config's overrides applied.
    pub fn network_config(&self) -> NetworkConfig {
        let mut builder = NetworkConfigBuilder::sepolia();
        if let Some(rpc_url) = &self.rpc_url {
            builder = builder.rpc_url(rpc_url.clone());
        }
        if let Some(token) = self.token_address {
            builder = builder.token(token);
        }
        if let Some(chain_id) = self.chain_id {
            builder = builder.chain_id(chain_id);
        }
        builder.build()
    }

    pub fn receipt_timeout(&self) -> Option<Duration> {
        self.receipt_timeout_secs.map(Duration::from_secs)
    }

    pub fn max_input_attempts(&self) -> u32 {
        self.max_input_attempts
            .unwrap_or(DEFAULT_MAX_INPUT_ATTEMPTS)
            .max(1)
    }
}

//! Network configuration for the token console.
//!
//! Provides the chain parameters and the token contract address the console
//! talks to. Only Sepolia is supported out of the box; deployments pointing at
//! a different RPC or token use [`NetworkConfigBuilder`].

use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};

/// Token contract managed by the console.
///
/// Replace with the deployed token address before building. The zero address
/// is treated as "not configured" and refused at startup.
pub const TOKEN_ADDRESS: Address = address!("0x0000000000000000000000000000000000000000");

/// Network configuration for the managed token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Chain ID
    pub chain_id: u64,
    /// JSON-RPC endpoint used when none is configured
    pub rpc_url: String,
    /// Token contract address
    pub token: Address,
}

impl NetworkConfig {
    /// Ethereum Sepolia testnet configuration.
    pub fn sepolia() -> Self {
        Self {
            chain_id: 11155111,
            // https://ethereum-sepolia-rpc.publicnode.com
            rpc_url: "https://ethereum-sepolia-rpc.publicnode.com".to_string(),
            token: TOKEN_ADDRESS,
        }
    }

    /// Whether a real token address has been configured.
    pub fn has_token(&self) -> bool {
        self.token != Address::ZERO
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::sepolia()
    }
}

/// Builder for custom network configurations.
#[derive(Debug, Clone)]
pub struct NetworkConfigBuilder {
    config: NetworkConfig,
}

impl NetworkConfigBuilder {
    /// Start with Sepolia defaults.
    pub fn sepolia() -> Self {
        Self {
            config: NetworkConfig::sepolia(),
        }
    }

    /// Override the RPC endpoint.
    pub fn rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.config.rpc_url = rpc_url.into();
        self
    }

    /// Override the token contract address.
    pub fn token(mut self, address: Address) -> Self {
        self.config.token = address;
        self
    }

    /// Override the expected chain ID.
    pub fn chain_id(mut self, chain_id: u64) -> Self {
        self.config.chain_id = chain_id;
        self
    }

    /// Build the network configuration.
    pub fn build(self) -> NetworkConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sepolia_config() {
        let config = NetworkConfig::sepolia();
        assert_eq!(config.chain_id, 11155111);
        assert_eq!(config.token, TOKEN_ADDRESS);
        assert!(!config.has_token());
    }

    #[test]
    fn test_custom_config_builder() {
        let custom_token = address!("1111111111111111111111111111111111111111");

        let config = NetworkConfigBuilder::sepolia()
            .token(custom_token)
            .rpc_url("http://localhost:8545")
            .build();

        assert_eq!(config.token, custom_token);
        assert_eq!(config.rpc_url, "http://localhost:8545");
        assert_eq!(config.chain_id, 11155111);
        assert!(config.has_token());
    }
}

//! Provider construction and account resolution.
//!
//! Read-only providers serve contract reads and receipt polling; the wallet
//! provider signs with the key resolved by [`account::resolve_account`].

pub mod account;

use alloy_network::EthereumWallet;
use alloy_provider::{Provider, ProviderBuilder};
use alloy_signer_local::PrivateKeySigner;
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

pub use account::{resolve_account, AccountInfo, AccountKind};

#[derive(Error, Debug)]
pub enum ClientError {
    /// Error parsing or validating URLs
    #[error("Invalid RPC URL: {0}")]
    InvalidUrl(String),

    /// Error connecting to the RPC endpoint
    #[error("Connection error: {0}")]
    Connection(String),

    /// No private key was supplied
    #[error("Private key not found. Set PRIVATE_KEY in the environment or in a .env file")]
    MissingPrivateKey,

    /// Error with private key
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),
}

impl ClientError {
    /// Whether the error stems from process configuration rather than the network.
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl(_) | Self::MissingPrivateKey | Self::InvalidPrivateKey(_)
        )
    }
}

fn parse_url<U>(rpc_url: &str) -> Result<U, ClientError>
where
    U: FromStr,
    U::Err: Display,
{
    rpc_url
        .parse()
        .map_err(|e| ClientError::InvalidUrl(format!("{rpc_url}: {e}")))
}

/// Read-only provider for contract calls and receipt polling.
pub async fn create_provider(rpc_url: &str) -> Result<impl Provider + Clone, ClientError> {
    let url = parse_url(rpc_url)?;
    Ok(ProviderBuilder::new().connect_http(url))
}

/// Create a provider that signs every transaction with `signer`.
pub fn create_wallet_provider(
    rpc_url: &str,
    signer: PrivateKeySigner,
) -> Result<impl Provider + Clone, ClientError> {
    let url = parse_url(rpc_url)?;
    let wallet = EthereumWallet::from(signer);

    Ok(ProviderBuilder::new().wallet(wallet).connect_http(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_url() {
        let result = create_provider("not a url").await;
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_invalid_wallet_url() {
        let signer: PrivateKeySigner = account::tests::ANVIL_KEY.parse().unwrap();
        let result = create_wallet_provider("not a url", signer);
        assert!(result.is_err());
    }

    #[test]
    fn test_configuration_errors() {
        assert!(ClientError::MissingPrivateKey.is_configuration());
        assert!(ClientError::InvalidPrivateKey("bad".into()).is_configuration());
        assert!(!ClientError::Connection("refused".into()).is_configuration());
    }
}

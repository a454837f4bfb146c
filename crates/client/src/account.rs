//! Account resolution from a locally held private key.

use crate::ClientError;
use alloy_primitives::Address;
use alloy_provider::Provider;
use alloy_signer_local::PrivateKeySigner;
use std::fmt;
use token::units::format_native;
use tracing::debug;

/// How the signing identity is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Key material lives in this process.
    Local,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
        }
    }
}

/// The account the console acts as.
#[derive(Debug, Clone)]
pub struct AccountInfo {
    pub address: Address,
    /// Native balance in ether
    pub balance: String,
    pub kind: AccountKind,
    signer: PrivateKeySigner,
}

impl AccountInfo {
    /// Signing handle for mutating calls.
    pub const fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }
}

/// Parse the configured secret into a signer.
///
/// Accepts hex with or without the `0x` prefix.
pub fn load_signer(private_key: Option<&str>) -> Result<PrivateKeySigner, ClientError> {
    let private_key = private_key
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .ok_or(ClientError::MissingPrivateKey)?;

    private_key
        .parse()
        .map_err(|e| ClientError::InvalidPrivateKey(format!("{}", e)))
}

/// Derive the signing identity and read its native balance.
pub async fn resolve_account<P>(
    provider: &P,
    private_key: Option<&str>,
) -> Result<AccountInfo, ClientError>
where
    P: Provider,
{
    let signer = load_signer(private_key)?;
    let address = signer.address();

    debug!("Querying native balance: address={}", address);
    let balance = provider
        .get_balance(address)
        .await
        .map_err(|e| ClientError::Connection(format!("{}", e)))?;

    Ok(AccountInfo {
        address,
        balance: format_native(balance),
        kind: AccountKind::Local,
        signer,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use alloy_primitives::address;
    use alloy_provider::ProviderBuilder;

    /// First prefunded account of a default anvil node.
    pub(crate) const ANVIL_KEY: &str =
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const ANVIL_ADDRESS: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    #[test]
    fn test_missing_key() {
        assert!(matches!(load_signer(None), Err(ClientError::MissingPrivateKey)));
        assert!(matches!(
            load_signer(Some("   ")),
            Err(ClientError::MissingPrivateKey)
        ));
    }

    #[test]
    fn test_malformed_key() {
        let Err(err) = load_signer(Some("0xnot-a-key")) else {
            panic!("malformed key was accepted");
        };
        assert!(matches!(err, ClientError::InvalidPrivateKey(_)));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_key_with_and_without_prefix() {
        let prefixed = load_signer(Some(ANVIL_KEY)).unwrap();
        let bare = load_signer(Some(ANVIL_KEY.trim_start_matches("0x"))).unwrap();

        assert_eq!(prefixed.address(), ANVIL_ADDRESS);
        assert_eq!(bare.address(), ANVIL_ADDRESS);
    }

    #[tokio::test]
    async fn test_resolve_fails_before_network_without_key() {
        let url = "http://127.0.0.1:1".parse().unwrap();
        let provider = ProviderBuilder::new().connect_http(url);

        let result = resolve_account(&provider, None).await;
        assert!(matches!(result, Err(ClientError::MissingPrivateKey)));
    }

    #[tokio::test]
    async fn test_resolve_reports_unreachable_node() {
        let url = "http://127.0.0.1:1".parse().unwrap();
        let provider = ProviderBuilder::new().connect_http(url);

        let result = resolve_account(&provider, Some(ANVIL_KEY)).await;
        assert!(matches!(result, Err(ClientError::Connection(_))));
    }

    #[test]
    fn test_account_kind_display() {
        assert_eq!(AccountKind::Local.to_string(), "local");
    }
}

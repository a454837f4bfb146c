use crate::TokenReader;
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use binding::IToken;
use eyre::Result;
use tracing::debug;

/// Read client for the managed token, backed by an alloy provider.
#[derive(Debug, Clone)]
pub struct TokenContract<P> {
    provider: P,
    address: Address,
}

impl<P> TokenContract<P>
where
    P: Provider + Clone,
{
    pub const fn new(provider: P, address: Address) -> Self {
        Self { provider, address }
    }

    /// The underlying provider, for reads outside the token interface.
    pub const fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P> TokenReader for TokenContract<P>
where
    P: Provider + Clone,
{
    fn address(&self) -> Address {
        self.address
    }

    async fn name(&self) -> Result<String> {
        debug!("Querying token name: token={}", self.address);
        let contract = IToken::new(self.address, &self.provider);
        Ok(contract.name().call().await?)
    }

    async fn symbol(&self) -> Result<String> {
        debug!("Querying token symbol: token={}", self.address);
        let contract = IToken::new(self.address, &self.provider);
        Ok(contract.symbol().call().await?)
    }

    async fn decimals(&self) -> Result<u8> {
        debug!("Querying token decimals: token={}", self.address);
        let contract = IToken::new(self.address, &self.provider);
        Ok(contract.decimals().call().await?)
    }

    async fn total_supply(&self) -> Result<U256> {
        debug!("Querying token total supply: token={}", self.address);
        let contract = IToken::new(self.address, &self.provider);
        Ok(contract.totalSupply().call().await?)
    }

    async fn balance_of(&self, holder: Address) -> Result<U256> {
        debug!("Querying token {} balance: holder={}", self.address, holder);
        let contract = IToken::new(self.address, &self.provider);
        Ok(contract.balanceOf(holder).call().await?)
    }

    async fn allowance(&self, owner: Address, spender: Address) -> Result<U256> {
        debug!(
            "Querying token {} allowance: owner={}, spender={}",
            self.address, owner, spender
        );
        let contract = IToken::new(self.address, &self.provider);
        Ok(contract.allowance(owner, spender).call().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{token_info, TokenError};
    use alloy_provider::ProviderBuilder;

    #[tokio::test]
    async fn test_unreachable_node_is_a_read_error() {
        let url = "http://127.0.0.1:1".parse().unwrap();
        let provider = ProviderBuilder::new().connect_http(url);
        let token = Address::repeat_byte(0x11);
        let contract = TokenContract::new(provider, token);

        assert_eq!(contract.address(), token);

        let err = token_info(&contract).await.unwrap_err();
        match err {
            TokenError::ContractRead { token: t, call, .. } => {
                assert_eq!(t, token);
                assert_eq!(call, "name");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

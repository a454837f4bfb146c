//! Alloy-backed implementations of [`Submitter`] and [`Confirmer`].

use crate::{Confirmer, Receipt, Submitter, TokenCall};
use alloy_primitives::{Address, TxHash};
use alloy_provider::{PendingTransactionBuilder, Provider};
use alloy_rpc_types_eth::TransactionReceipt;
use binding::IToken;
use token::TokenContract;
use tracing::debug;

/// Submits token calls through a wallet-enabled provider.
///
/// The provider's wallet decides the signing identity; nonce, gas and fees are
/// filled by the provider.
#[derive(Debug, Clone)]
pub struct WalletSubmitter<P> {
    provider: P,
    token: Address,
}

impl<P> WalletSubmitter<P>
where
    P: Provider + Clone,
{
    pub const fn new(provider: P, token: Address) -> Self {
        Self { provider, token }
    }
}

impl<P> Submitter for WalletSubmitter<P>
where
    P: Provider + Clone,
{
    async fn submit(&self, call: TokenCall) -> eyre::Result<TxHash> {
        debug!(token = %self.token, call = ?call, "Submitting token call");

        let contract = IToken::new(self.token, &self.provider);
        let pending = match call {
            TokenCall::Approve { spender, amount } => {
                contract.approve(spender, amount).send().await?
            }
            TokenCall::TransferFrom { from, to, amount } => {
                contract.transferFrom(from, to, amount).send().await?
            }
            TokenCall::MintTokens { to, amount } => contract.mintTokens(to, amount).send().await?,
            TokenCall::Burn { from, to } => contract.burn(from, to).send().await?,
        };

        Ok(*pending.tx_hash())
    }
}

impl<P> Confirmer for TokenContract<P>
where
    P: Provider + Clone,
{
    async fn wait_for_receipt(&self, tx_hash: TxHash) -> eyre::Result<Receipt> {
        debug!(%tx_hash, "Waiting for receipt");

        let receipt = PendingTransactionBuilder::new(self.provider().root().clone(), tx_hash)
            .get_receipt()
            .await?;

        Ok(receipt_summary(&receipt))
    }
}

fn receipt_summary(receipt: &TransactionReceipt) -> Receipt {
    Receipt {
        tx_hash: receipt.transaction_hash,
        block_number: receipt.block_number,
        gas_used: receipt.gas_used,
        effective_gas_price: receipt.effective_gas_price,
        success: receipt.status(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_provider::ProviderBuilder;
    use serde_json::json;

    const TX_HASH: &str = "0x9fc76417374aa880d4449a1f7f31ec597f00b1f6f3dd2d66f4c9c6c445836d8b";

    fn rpc_receipt(status: &str) -> TransactionReceipt {
        serde_json::from_value(json!({
            "type": "0x2",
            "status": status,
            "cumulativeGasUsed": "0x1f4a0",
            "logs": [],
            "logsBloom": format!("0x{}", "00".repeat(256)),
            "transactionHash": TX_HASH,
            "transactionIndex": "0x3",
            "blockHash": "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b",
            "blockNumber": "0x6acfc0",
            "gasUsed": "0xc738",
            "effectiveGasPrice": "0x59682f00",
            "from": "0xa1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1",
            "to": "0x7070707070707070707070707070707070707070",
            "contractAddress": null
        }))
        .unwrap()
    }

    #[test]
    fn test_receipt_summary() {
        let receipt = receipt_summary(&rpc_receipt("0x1"));

        assert_eq!(receipt.tx_hash, TX_HASH.parse::<TxHash>().unwrap());
        assert_eq!(receipt.block_number, Some(7_000_000));
        assert_eq!(receipt.gas_used, 51_000);
        assert_eq!(receipt.effective_gas_price, 1_500_000_000);
        assert!(receipt.success);
    }

    #[test]
    fn test_reverted_receipt_summary() {
        let receipt = receipt_summary(&rpc_receipt("0x0"));

        assert!(!receipt.success);
        assert_eq!(receipt.block_number, Some(7_000_000));
    }

    #[tokio::test]
    async fn test_submit_to_unreachable_node_fails() {
        let url = "http://127.0.0.1:1".parse().unwrap();
        let provider = ProviderBuilder::new().connect_http(url);
        let submitter = WalletSubmitter::new(provider, Address::repeat_byte(0x70));

        let result = submitter
            .submit(TokenCall::Burn {
                from: Address::repeat_byte(1),
                to: Address::repeat_byte(2),
            })
            .await;

        assert!(result.is_err());
    }
}

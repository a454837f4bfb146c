//! State-changing token operations.
//!
//! Every operation follows the same procedure: read decimals when the call
//! carries an amount, scale the amount, submit one signed contract call,
//! wait for its receipt and report the gas cost. Nothing is retried; a failure
//! at any step is returned as a [`TransactionError`].

pub mod approve;
pub mod burn;
pub mod chain;
pub mod mint;
pub mod transfer;

use alloy_primitives::{Address, TxHash, U256};
use std::{future::Future, time::Duration};
use thiserror::Error;
use token::{
    units::{format_native, AmountError},
    TokenError, TokenReader,
};
use tracing::info;

pub use approve::Approve;
pub use burn::Burn;
pub use chain::WalletSubmitter;
pub use mint::Mint;
pub use transfer::Transfer;

/// A named call on the token contract with its encoded arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenCall {
    /// `approve(spender, amount)`
    Approve { spender: Address, amount: U256 },
    /// `transferFrom(from, to, amount)`
    TransferFrom {
        from: Address,
        to: Address,
        amount: U256,
    },
    /// `mintTokens(to, amount)`
    MintTokens { to: Address, amount: U256 },
    /// `burn(from, to)`: burns the whole balance of `from`
    Burn { from: Address, to: Address },
}

impl TokenCall {
    /// Solidity function invoked by this call.
    pub const fn function_name(&self) -> &'static str {
        match self {
            Self::Approve { .. } => "approve",
            Self::TransferFrom { .. } => "transferFrom",
            Self::MintTokens { .. } => "mintTokens",
            Self::Burn { .. } => "burn",
        }
    }
}

/// Capability to submit token calls signed by a single identity.
pub trait Submitter: Send + Sync {
    /// Sign and broadcast `call`, returning the transaction hash once the node accepts it.
    fn submit(&self, call: TokenCall) -> impl Future<Output = eyre::Result<TxHash>> + Send;
}

/// Read-side capability to wait for a transaction to be included.
pub trait Confirmer: Send + Sync {
    fn wait_for_receipt(
        &self,
        tx_hash: TxHash,
    ) -> impl Future<Output = eyre::Result<Receipt>> + Send;
}

/// Inclusion record of a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: u64,
    /// Price paid per unit of gas, in wei
    pub effective_gas_price: u128,
    /// False if the transaction reverted
    pub success: bool,
}

/// Trait for state-changing token operations.
pub trait Action: Send + Sync {
    /// Decimal amount to scale by the token's decimals, if the call carries one.
    fn amount(&self) -> Option<&str>;

    /// Build the contract call. `amount` is the scaled amount, zero for calls without one.
    fn call(&self, amount: U256) -> TokenCall;

    /// Get a human-readable description of this action.
    fn description(&self) -> String;
}

/// Result of a confirmed action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionResult {
    /// Transaction hash
    pub tx_hash: TxHash,
    /// Block number where transaction was included
    pub block_number: Option<u64>,
    /// Gas used
    pub gas_used: u64,
    /// Effective gas price in wei
    pub effective_gas_price: u128,
}

impl TransactionResult {
    /// Transaction cost in wei.
    pub fn fee(&self) -> U256 {
        U256::from(self.gas_used) * U256::from(self.effective_gas_price)
    }

    /// Transaction cost in ether.
    pub fn fee_ether(&self) -> String {
        format_native(self.fee())
    }
}

impl From<Receipt> for TransactionResult {
    fn from(receipt: Receipt) -> Self {
        Self {
            tx_hash: receipt.tx_hash,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
            effective_gas_price: receipt.effective_gas_price,
        }
    }
}

/// Failure of a state-changing operation.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// Reading decimals failed.
    #[error(transparent)]
    Read(#[from] TokenError),

    /// The amount could not be scaled.
    #[error(transparent)]
    Amount(#[from] AmountError),

    /// The node refused the signed call.
    #[error("`{call}` was rejected: {cause:#}")]
    Submission { call: &'static str, cause: eyre::Report },

    /// Waiting for the receipt failed or timed out.
    #[error("failed waiting for receipt of {tx_hash}: {cause:#}")]
    Receipt { tx_hash: TxHash, cause: eyre::Report },

    /// The transaction was included but reverted.
    #[error("transaction {tx_hash} reverted")]
    Reverted {
        tx_hash: TxHash,
        block_number: Option<u64>,
    },
}

/// Runs actions against the token with one read client and one signer.
pub struct Executor<C, S> {
    client: C,
    submitter: S,
    receipt_timeout: Option<Duration>,
}

impl<C, S> Executor<C, S>
where
    C: TokenReader + Confirmer,
    S: Submitter,
{
    pub const fn new(client: C, submitter: S) -> Self {
        Self {
            client,
            submitter,
            receipt_timeout: None,
        }
    }

    /// Give up waiting for a receipt after `timeout`.
    pub fn with_receipt_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.receipt_timeout = timeout;
        self
    }

    /// The read client.
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Execute the action.
    ///
    /// Returns once the transaction is confirmed and did not revert.
    pub async fn execute<A: Action>(
        &self,
        action: &A,
    ) -> Result<TransactionResult, TransactionError> {
        let tx_hash = self.send(action).await?;
        self.confirm(tx_hash).await
    }

    /// Scale the action's amount and submit its call.
    ///
    /// Returns the hash as soon as the node accepts the transaction.
    pub async fn send<A: Action>(&self, action: &A) -> Result<TxHash, TransactionError> {
        info!("{}", action.description());

        let amount = match action.amount() {
            Some(amount) => {
                let decimals = token::decimals(&self.client).await?;
                token::units::parse_amount(amount, decimals)?
            }
            None => U256::ZERO,
        };

        let call = action.call(amount);
        let function = call.function_name();

        let tx_hash = self
            .submitter
            .submit(call)
            .await
            .map_err(|cause| TransactionError::Submission {
                call: function,
                cause,
            })?;
        info!(%tx_hash, function, "Transaction sent, waiting for confirmation...");

        Ok(tx_hash)
    }

    /// Wait for `tx_hash` to be included and check that it did not revert.
    pub async fn confirm(&self, tx_hash: TxHash) -> Result<TransactionResult, TransactionError> {
        let receipt = self.wait_for_receipt(tx_hash).await?;
        if !receipt.success {
            return Err(TransactionError::Reverted {
                tx_hash,
                block_number: receipt.block_number,
            });
        }

        let result = TransactionResult::from(receipt);
        info!(
            tx_hash = %result.tx_hash,
            block_number = result.block_number,
            gas_used = result.gas_used,
            fee = %result.fee_ether(),
            "Transaction confirmed."
        );

        Ok(result)
    }

    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<Receipt, TransactionError> {
        let waiting = self.client.wait_for_receipt(tx_hash);
        let receipt = match self.receipt_timeout {
            Some(timeout) => match tokio::time::timeout(timeout, waiting).await {
                Ok(receipt) => receipt,
                Err(_) => Err(eyre::eyre!("no receipt after {timeout:?}")),
            },
            None => waiting.await,
        };

        receipt.map_err(|cause| TransactionError::Receipt { tx_hash, cause })
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::{Confirmer, Receipt, Submitter, TokenCall};
    use alloy_primitives::{Address, TxHash, U256};
    use std::sync::{Arc, Mutex};
    use token::TokenReader;

    /// What the fake node does with the next submission.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Outcome {
        Success,
        Reject,
        Revert,
        NeverMined,
    }

    /// In-memory token node recording every call it sees.
    #[derive(Clone)]
    pub struct FakeNode {
        pub decimals: u8,
        pub outcome: Outcome,
        pub submitted: Arc<Mutex<Vec<TokenCall>>>,
        pub decimals_reads: Arc<Mutex<usize>>,
    }

    impl FakeNode {
        pub fn new(decimals: u8) -> Self {
            Self {
                decimals,
                outcome: Outcome::Success,
                submitted: Arc::new(Mutex::new(Vec::new())),
                decimals_reads: Arc::new(Mutex::new(0)),
            }
        }

        pub fn submitted(&self) -> Vec<TokenCall> {
            self.submitted.lock().unwrap().clone()
        }

        pub fn decimals_reads(&self) -> usize {
            *self.decimals_reads.lock().unwrap()
        }
    }

    impl TokenReader for FakeNode {
        fn address(&self) -> Address {
            Address::repeat_byte(0xee)
        }

        async fn name(&self) -> eyre::Result<String> {
            Ok("Fake".to_string())
        }

        async fn symbol(&self) -> eyre::Result<String> {
            Ok("FAKE".to_string())
        }

        async fn decimals(&self) -> eyre::Result<u8> {
            *self.decimals_reads.lock().unwrap() += 1;
            Ok(self.decimals)
        }

        async fn total_supply(&self) -> eyre::Result<U256> {
            Ok(U256::ZERO)
        }

        async fn balance_of(&self, _holder: Address) -> eyre::Result<U256> {
            Ok(U256::ZERO)
        }

        async fn allowance(&self, _owner: Address, _spender: Address) -> eyre::Result<U256> {
            Ok(U256::ZERO)
        }
    }

    impl Submitter for FakeNode {
        async fn submit(&self, call: TokenCall) -> eyre::Result<TxHash> {
            if self.outcome == Outcome::Reject {
                eyre::bail!("insufficient funds for gas");
            }
            let mut submitted = self.submitted.lock().unwrap();
            submitted.push(call);
            Ok(TxHash::with_last_byte(submitted.len() as u8))
        }
    }

    impl Confirmer for FakeNode {
        async fn wait_for_receipt(&self, tx_hash: TxHash) -> eyre::Result<Receipt> {
            if self.outcome == Outcome::NeverMined {
                std::future::pending::<()>().await;
            }
            Ok(Receipt {
                tx_hash,
                block_number: Some(7_000_000),
                gas_used: 46_000,
                effective_gas_price: 2_000_000_000,
                success: self.outcome != Outcome::Revert,
            })
        }
    }
}

use crate::{Action, TokenCall};
use alloy_primitives::{Address, U256};

/// Input for a mint action. The signer needs the token's MINTER role.
#[derive(Debug, Clone)]
pub struct Mint {
    /// Recipient of the new tokens
    pub to: Address,
    /// Amount as a decimal string
    pub amount: String,
}

impl Action for Mint {
    fn amount(&self) -> Option<&str> {
        Some(&self.amount)
    }

    fn call(&self, amount: U256) -> TokenCall {
        TokenCall::MintTokens { to: self.to, amount }
    }

    fn description(&self) -> String {
        format!("Minting {} tokens to {}", self.amount, self.to)
    }
}

use crate::{Action, TokenCall};
use alloy_primitives::{Address, U256};

/// Input for an approve action.
#[derive(Debug, Clone)]
pub struct Approve {
    /// Address allowed to spend on the signer's behalf
    pub spender: Address,
    /// Allowance as a decimal amount
    pub amount: String,
}

impl Action for Approve {
    fn amount(&self) -> Option<&str> {
        Some(&self.amount)
    }

    fn call(&self, amount: U256) -> TokenCall {
        TokenCall::Approve {
            spender: self.spender,
            amount,
        }
    }

    fn description(&self) -> String {
        format!("Approving {} to spend {} tokens", self.spender, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approve_call() {
        let spender = Address::repeat_byte(9);
        let approve = Approve {
            spender,
            amount: "100".to_string(),
        };

        assert_eq!(approve.amount(), Some("100"));
        assert_eq!(
            approve.call(U256::from(100)),
            TokenCall::Approve {
                spender,
                amount: U256::from(100)
            }
        );
        assert!(approve.description().contains("100 tokens"));
    }
}

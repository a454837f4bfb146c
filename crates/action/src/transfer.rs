use crate::{Action, TokenCall};
use alloy_primitives::{Address, U256};

/// Input for a transfer action.
///
/// Moves tokens with `transferFrom`, so `from` must have approved the signer
/// (the signer itself when `from` is the signer's own address).
#[derive(Debug, Clone)]
pub struct Transfer {
    pub from: Address,
    pub to: Address,
    /// Amount as a decimal string
    pub amount: String,
}

impl Action for Transfer {
    fn amount(&self) -> Option<&str> {
        Some(&self.amount)
    }

    fn call(&self, amount: U256) -> TokenCall {
        TokenCall::TransferFrom {
            from: self.from,
            to: self.to,
            amount,
        }
    }

    fn description(&self) -> String {
        format!(
            "Transferring {} tokens from {} to {}",
            self.amount, self.from, self.to
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_uses_transfer_from() {
        let transfer = Transfer {
            from: Address::repeat_byte(1),
            to: Address::repeat_byte(2),
            amount: "10".to_string(),
        };

        let call = transfer.call(U256::from(10));
        assert_eq!(call.function_name(), "transferFrom");
        assert_eq!(
            call,
            TokenCall::TransferFrom {
                from: Address::repeat_byte(1),
                to: Address::repeat_byte(2),
                amount: U256::from(10),
            }
        );
    }
}

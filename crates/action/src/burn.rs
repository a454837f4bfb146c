use crate::{Action, TokenCall};
use alloy_primitives::{Address, U256};

/// Input for a burn action. The signer needs the token's BURNER role.
///
/// The contract burns the entire balance of `from` and credits the proceeds
/// to `to`; there is no amount.
#[derive(Debug, Clone)]
pub struct Burn {
    pub from: Address,
    pub to: Address,
}

impl Action for Burn {
    fn amount(&self) -> Option<&str> {
        None
    }

    fn call(&self, _amount: U256) -> TokenCall {
        TokenCall::Burn {
            from: self.from,
            to: self.to,
        }
    }

    fn description(&self) -> String {
        format!("Burning tokens from {} to {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burn_ignores_amount() {
        let burn = Burn {
            from: Address::repeat_byte(1),
            to: Address::repeat_byte(2),
        };

        assert_eq!(burn.amount(), None);
        assert_eq!(burn.call(U256::from(5)), burn.call(U256::ZERO));
        assert_eq!(burn.call(U256::ZERO).function_name(), "burn");
    }
}

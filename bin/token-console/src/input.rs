//! Validation of user-typed addresses, amounts and confirmations.

use alloy_primitives::Address;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static ADDRESS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("address pattern is valid"));

/// Input rejected by a local pattern check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("`{0}` is not an address (expected 0x followed by 40 hex digits)")]
    Address(String),

    #[error("`{0}` is not a non-negative decimal amount")]
    Amount(String),
}

/// Returns true for `0x` followed by exactly 40 hex digits, any case.
pub fn is_address(input: &str) -> bool {
    ADDRESS_PATTERN.is_match(input)
}

pub fn parse_address(input: &str) -> Result<Address, ValidationError> {
    if !is_address(input) {
        return Err(ValidationError::Address(input.to_string()));
    }
    input
        .parse()
        .map_err(|_| ValidationError::Address(input.to_string()))
}

pub fn parse_amount(input: &str) -> Result<String, ValidationError> {
    if token::units::is_amount(input) {
        Ok(input.to_string())
    } else {
        Err(ValidationError::Amount(input.to_string()))
    }
}

/// Case-insensitive "yes".
pub fn is_confirmation(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("yes")
}

//! Conversion between human-readable decimal amounts and fixed-point token units.
//!
//! Scaling is delegated to [`alloy_primitives::utils`]; this module adds the
//! input pattern, fractional truncation and trailing-zero trimming so amounts
//! read back the way users type them.

use alloy_primitives::{
    utils::{format_ether, format_units, parse_units},
    U256,
};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static AMOUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("amount pattern is valid"));

/// Amount that could not be scaled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Input is not an unsigned decimal number.
    #[error("`{0}` is not a non-negative decimal number")]
    Malformed(String),

    /// The units library refused the value (overflow, unsupported precision).
    #[error("cannot scale `{amount}` by {decimals} decimals: {reason}")]
    Scale {
        amount: String,
        decimals: u8,
        reason: String,
    },
}

/// Returns true if `input` is digits with an optional single fractional part.
pub fn is_amount(input: &str) -> bool {
    AMOUNT_PATTERN.is_match(input)
}

/// Scale a decimal amount into integer token units.
///
/// Fractional digits beyond `decimals` are truncated, never rounded.
pub fn parse_amount(amount: &str, decimals: u8) -> Result<U256, AmountError> {
    if !is_amount(amount) {
        return Err(AmountError::Malformed(amount.to_string()));
    }

    let truncated = truncate_fraction(amount, decimals);
    parse_units(&truncated, decimals)
        .map(|parsed| parsed.get_absolute())
        .map_err(|e| AmountError::Scale {
            amount: amount.to_string(),
            decimals,
            reason: e.to_string(),
        })
}

/// Render integer token units as a decimal string.
pub fn format_amount(value: U256, decimals: u8) -> Result<String, AmountError> {
    format_units(value, decimals)
        .map(trim_decimal)
        .map_err(|e| AmountError::Scale {
            amount: value.to_string(),
            decimals,
            reason: e.to_string(),
        })
}

/// Render a wei amount as ether.
pub fn format_native(wei: U256) -> String {
    trim_decimal(format_ether(wei))
}

fn truncate_fraction(amount: &str, decimals: u8) -> String {
    match amount.split_once('.') {
        Some((integer, fraction)) if fraction.len() > decimals as usize => {
            if decimals == 0 {
                integer.to_string()
            } else {
                format!("{integer}.{}", &fraction[..decimals as usize])
            }
        }
        _ => amount.to_string(),
    }
}

// "10.500" -> "10.5", "100.0" -> "100"
fn trim_decimal(formatted: String) -> String {
    if !formatted.contains('.') {
        return formatted;
    }
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

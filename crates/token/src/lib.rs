//! Read access to the managed token contract.
//!
//! This crate provides the [`TokenReader`] seam over the contract's view
//! functions, a provider-backed implementation in [`contract`], and the
//! metadata, balance and allowance queries the console is built on. Every
//! scaled quantity is formatted with the decimals read in the same query.

pub mod contract;
pub mod units;

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;
use units::AmountError;

pub use contract::TokenContract;

/// Token metadata, read once per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Token contract address
    pub address: Address,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Total supply scaled by `decimals`
    pub total_supply: String,
}

/// Errors raised while reading the token contract.
#[derive(Debug, Error)]
pub enum TokenError {
    /// A view call failed or returned an unexpected shape.
    #[error("failed to read `{call}` from token {token}: {cause:#}")]
    ContractRead {
        token: Address,
        call: &'static str,
        cause: eyre::Report,
    },

    /// A raw quantity could not be rendered with the token's decimals.
    #[error(transparent)]
    Amount(#[from] AmountError),
}

/// Trait for reading the token contract's view functions.
pub trait TokenReader: Send + Sync {
    /// Address of the token contract.
    fn address(&self) -> Address;

    fn name(&self) -> impl Future<Output = eyre::Result<String>> + Send;

    fn symbol(&self) -> impl Future<Output = eyre::Result<String>> + Send;

    fn decimals(&self) -> impl Future<Output = eyre::Result<u8>> + Send;

    /// Raw total supply in token units.
    fn total_supply(&self) -> impl Future<Output = eyre::Result<U256>> + Send;

    /// Raw balance of `holder` in token units.
    fn balance_of(&self, holder: Address) -> impl Future<Output = eyre::Result<U256>> + Send;

    /// Raw amount `spender` may move on behalf of `owner`.
    fn allowance(
        &self,
        owner: Address,
        spender: Address,
    ) -> impl Future<Output = eyre::Result<U256>> + Send;
}

fn read_error(token: Address, call: &'static str) -> impl FnOnce(eyre::Report) -> TokenError {
    move |cause| TokenError::ContractRead { token, call, cause }
}

/// Read the token's decimals, mapping failure to a [`TokenError`].
pub async fn decimals<R: TokenReader>(reader: &R) -> Result<u8, TokenError> {
    reader
        .decimals()
        .await
        .map_err(read_error(reader.address(), "decimals"))
}

/// Fetch name, symbol, decimals and total supply.
///
/// Fails as a whole if any single read fails.
pub async fn token_info<R: TokenReader>(reader: &R) -> Result<TokenInfo, TokenError> {
    let token = reader.address();

    let name = reader.name().await.map_err(read_error(token, "name"))?;
    let symbol = reader.symbol().await.map_err(read_error(token, "symbol"))?;
    let decimals = decimals(reader).await?;
    let total_supply = reader
        .total_supply()
        .await
        .map_err(read_error(token, "totalSupply"))?;

    Ok(TokenInfo {
        address: token,
        name,
        symbol,
        decimals,
        total_supply: units::format_amount(total_supply, decimals)?,
    })
}

/// Token balance of `holder` as a decimal string.
pub async fn balance_of<R: TokenReader>(reader: &R, holder: Address) -> Result<String, TokenError> {
    let decimals = decimals(reader).await?;
    let balance = reader
        .balance_of(holder)
        .await
        .map_err(read_error(reader.address(), "balanceOf"))?;

    Ok(units::format_amount(balance, decimals)?)
}

/// Allowance granted by `owner` to `spender` as a decimal string.
pub async fn allowance_of<R: TokenReader>(
    reader: &R,
    owner: Address,
    spender: Address,
) -> Result<String, TokenError> {
    let decimals = decimals(reader).await?;
    let allowance = reader
        .allowance(owner, spender)
        .await
        .map_err(read_error(reader.address(), "allowance"))?;

    Ok(units::format_amount(allowance, decimals)?)
}

//! Contract bindings for the token console.
//!
//! The only external contract is the managed token, an ERC20 extended with
//! role-gated `mintTokens` and `burn` entry points.
//!
//! Bindings are generated using alloy's `sol!` macro.

pub mod token;

pub use token::IToken;

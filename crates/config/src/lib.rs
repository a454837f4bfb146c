//! Configuration types for the token console.
//!
//! This crate provides:
//! - Network configuration (Sepolia testnet)
//! - The build-time token contract address
//! - Overrides for operator-specific deployments

pub mod network;

pub use network::{NetworkConfig, NetworkConfigBuilder, TOKEN_ADDRESS};

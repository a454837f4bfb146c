//! Interactive console for a single ERC20 token.
//!
//! The binary resolves the signing account, reads the token's metadata and
//! then hands control to [`menu::App`], which loops over the operation menu
//! until the user exits.

pub mod config;
pub mod console;
pub mod input;
pub mod menu;

pub use console::Console;
pub use menu::{App, Choice};

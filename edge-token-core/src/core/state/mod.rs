//! Application state slices
//!
//! Each slice is an immutable snapshot with a pure `reduce` that returns
//! the next snapshot for an action.

pub mod tokens;
pub mod wallets;

pub use tokens::*;
pub use wallets::*;

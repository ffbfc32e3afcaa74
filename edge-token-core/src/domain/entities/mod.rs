//! Domain entities and value objects
//!
//! This module contains the core domain entities and value objects
//! that represent tokens and wallets as the UI sees them.

pub mod wallet;
pub mod token;

// Re-export entities
pub use wallet::*;
pub use token::*;

//! Domain layer - entities and repositories
//!
//! This module contains the domain types for the token registry and the
//! repository trait for the wallet core it forwards edits to.

pub mod entities;
pub mod repositories;

// Re-export domain components
pub use entities::*;
pub use repositories::*;

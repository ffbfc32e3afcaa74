//! Application use cases
//!
//! This module contains the application use cases that orchestrate the
//! token registry and the external wallet core.

pub mod token_management;

// Re-export use cases
pub use token_management::*;

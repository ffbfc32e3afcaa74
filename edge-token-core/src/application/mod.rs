//! Application layer - use cases
//!
//! This module contains the application logic driven by the token screens.

pub mod use_cases;

// Re-export application components
pub use use_cases::*;

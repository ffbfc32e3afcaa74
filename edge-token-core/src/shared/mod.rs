//! Shared types, configuration, and constants
//!
//! This module contains common types, configuration, and constants used throughout
//! the token core. It provides a centralized location for shared functionality.

pub mod types;
pub mod constants;
pub mod config;
pub mod error;

// Re-export shared components
pub use types::*;
pub use constants::*;
pub use config::*;
pub use error::*;

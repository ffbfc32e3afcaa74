//! Domain repositories
//!
//! This module contains repository traits for the external wallet core
//! following Domain-Driven Design principles.

pub mod wallet_core_repository;

// Re-export repositories
pub use wallet_core_repository::*;

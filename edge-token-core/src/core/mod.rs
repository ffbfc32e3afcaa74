//! Core token functionality
//!
//! This module contains the token registry reconciler, denomination
//! conversion, and the state slices the UI keeps.

pub mod denomination;
pub mod registry;
pub mod state;

pub use denomination::{decimal_places_to_multiplier, multiplier_to_decimal_places};
pub use registry::{merge_visible_tokens, prepare_edit, validate_add, validate_delete, validate_edit};

//! Constants for the token core
//!
//! This module contains all constants used throughout the token core.

// Token form limits
pub const MAX_TOKEN_CODE_CHARACTERS: usize = 7;
pub const MAX_DECIMAL_PLACES: u32 = 255;

// Environment variables
pub const ENV_MAX_CODE_CHARS: &str = "TOKEN_CORE_MAX_CODE_CHARS";
pub const ENV_LOG_LEVEL: &str = "TOKEN_CORE_LOG_LEVEL";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// FFI limits
pub const FFI_MAX_INPUT_LENGTH: usize = 1024 * 1024; // 1MB of JSON

// Form field names reported by IncompleteForm
pub const FIELD_CURRENCY_NAME: &str = "currencyName";
pub const FIELD_CURRENCY_CODE: &str = "currencyCode";
pub const FIELD_DECIMAL_PLACES: &str = "decimalPlaces";
pub const FIELD_CONTRACT_ADDRESS: &str = "contractAddress";

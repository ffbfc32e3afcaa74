//! Error handling for the token core
//!
//! This module defines the error types used throughout the token core.
//! Token validation failures are plain values so the display layer can map
//! each kind to its own alert.

use thiserror::Error;

/// Rejection of a single add / edit / delete submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditTokenError {
    #[error("Incomplete token form: {0} is required")]
    IncompleteForm(String),

    #[error("Currency code already in use: {0}")]
    DuplicateCurrencyCode(String),

    #[error("Contract address already in use by {currency_code}: {contract_address}")]
    DuplicateContractAddress {
        currency_code: String,
        contract_address: String,
    },

    #[error("Invalid denomination: {0}")]
    InvalidDenomination(String),

    #[error("Token not found: {0}")]
    TokenNotFound(String),

    #[error("Currency code {code} exceeds {max} characters")]
    CurrencyCodeTooLong { code: String, max: usize },
}

impl EditTokenError {
    pub fn incomplete_form(field: impl Into<String>) -> Self {
        Self::IncompleteForm(field.into())
    }

    pub fn duplicate_currency_code(code: impl Into<String>) -> Self {
        Self::DuplicateCurrencyCode(code.into())
    }

    pub fn invalid_denomination(value: impl Into<String>) -> Self {
        Self::InvalidDenomination(value.into())
    }

    pub fn token_not_found(code: impl Into<String>) -> Self {
        Self::TokenNotFound(code.into())
    }

    /// Stable numeric code handed across the FFI boundary
    pub fn code(&self) -> i32 {
        match self {
            Self::IncompleteForm(_) => 101,
            Self::DuplicateCurrencyCode(_) => 102,
            Self::InvalidDenomination(_) => 103,
            Self::TokenNotFound(_) => 104,
            Self::DuplicateContractAddress { .. } => 105,
            Self::CurrencyCodeTooLong { .. } => 106,
        }
    }
}

/// Token core error type
#[derive(Error, Debug, Clone)]
pub enum TokenCoreError {
    #[error(transparent)]
    EditToken(#[from] EditTokenError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Wallet core error: {0}")]
    WalletCore(String),
}

impl TokenCoreError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Create an error reported by the external wallet core
    pub fn wallet_core(message: impl Into<String>) -> Self {
        Self::WalletCore(message.into())
    }

    /// The validation failure behind this error, if any
    pub fn as_edit_token(&self) -> Option<&EditTokenError> {
        match self {
            Self::EditToken(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TokenCoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

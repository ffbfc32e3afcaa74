//! Edge Token Core
//!
//! Token registry core for the Edge mobile wallet.
//! Reconciles a wallet's built-in tokens with the user's custom tokens and
//! validates add / edit / delete requests before they are forwarded to the
//! wallet core.
//!
//! ## Architecture
//!
//! - **Core**: Registry reconciliation, denomination conversion, state slices
//! - **Domain**: Token and wallet entities, wallet core repository trait
//! - **Application**: Token management use case
//! - **Shared**: Common types, errors, constants, and configuration
//!
//! ## Usage
//!
//! ```rust
//! use edge_token_core::{merge_visible_tokens, validate_edit, CustomTokenInfo, MetaToken, TokenForm};
//!
//! let meta_tokens: Vec<MetaToken> = Vec::new();
//! let custom_tokens = vec![CustomTokenInfo {
//!     currency_code: "FOO".to_string(),
//!     currency_name: "Foo".to_string(),
//!     contract_address: "0xF00".to_string(),
//!     multiplier: "1000000".to_string(),
//!     is_visible: true,
//! }];
//!
//! let visible = merge_visible_tokens(&meta_tokens, &custom_tokens);
//! let form = TokenForm::new("Foo", "foo", "0xF00", "8");
//! assert!(validate_edit(&form, "FOO", &visible).is_ok());
//! ```

pub mod core;
pub mod domain;
pub mod shared;
pub mod application;

use shared::config::CoreConfig;
use shared::error::TokenCoreError;

// Re-export core operations
pub use crate::core::denomination::{decimal_places_to_multiplier, multiplier_to_decimal_places};
pub use crate::core::registry::{merge_visible_tokens, prepare_edit, validate_add, validate_delete, validate_edit};
pub use crate::core::state::{TokenAction, TokenState, WalletAction, WalletsState};

// Re-export domain entities
pub use crate::domain::{CustomTokenInfo, MetaToken, TokenEntry, TokenForm, TokenSource, VisibleTokenSet, WalletSnapshot};
pub use crate::domain::WalletCoreTokens;

// Re-export application services
pub use application::TokenManagementService;

// Re-export shared types
pub use shared::error::EditTokenError;
pub use shared::types::Denomination;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

// Feature flags
#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export FFI functions when feature is enabled
#[cfg(feature = "ffi")]
pub use ffi::*;

/// Load configuration and initialize logging
pub fn init() -> Result<CoreConfig, TokenCoreError> {
    let config = CoreConfig::from_env()?;

    let logger = env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .try_init();
    if logger.is_err() {
        log::debug!("Logger already initialized, keeping existing logger");
    }

    log::info!("{} {} initialized", NAME, VERSION);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let first = init().expect("Failed to initialize token core");
        let second = init().expect("Failed to initialize token core twice");
        assert_eq!(first, second);
    }

    #[test]
    fn test_version_info() {
        assert_eq!(NAME, "edge-token-core");
        assert!(!VERSION.is_empty());
    }
}

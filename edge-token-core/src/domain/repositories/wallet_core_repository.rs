//! Wallet core token repository
//!
//! The external wallet core owns built-in token metadata and persists
//! custom tokens. Validated edits are forwarded through this trait.

use crate::domain::entities::{CustomTokenInfo, MetaToken};
use crate::shared::error::TokenCoreError;

/// Token operations exposed by the wallet core, keyed by (wallet id, currency code)
#[cfg_attr(test, mockall::automock)]
pub trait WalletCoreTokens {
    /// Built-in tokens for a wallet
    fn meta_tokens(&self, wallet_id: &str) -> Result<Vec<MetaToken>, TokenCoreError>;

    /// Persist a new custom token
    fn add_custom_token(&self, wallet_id: &str, token: &CustomTokenInfo) -> Result<(), TokenCoreError>;

    /// Replace the custom token previously stored under `old_currency_code`
    fn edit_custom_token(
        &self,
        wallet_id: &str,
        token: &CustomTokenInfo,
        old_currency_code: &str,
    ) -> Result<(), TokenCoreError>;

    /// Remove a custom token from the wallet
    fn delete_custom_token(&self, wallet_id: &str, currency_code: &str) -> Result<(), TokenCoreError>;
}

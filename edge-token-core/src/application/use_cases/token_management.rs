//! Custom token management use case
//!
//! Takes a token form from one of the token screens, validates it against
//! the wallet's merged token list, forwards the accepted record to the
//! wallet core and returns the next token state snapshot.

use crate::core::registry::{merge_visible_tokens, prepare_edit, validate_add, validate_delete};
use crate::core::state::{TokenAction, TokenState};
use crate::domain::entities::{CustomTokenInfo, TokenForm, VisibleTokenSet};
use crate::domain::repositories::WalletCoreTokens;
use crate::shared::config::CoreConfig;
use crate::shared::error::{EditTokenError, TokenCoreError};
use crate::shared::types::normalize_currency_code;

pub struct TokenManagementService<'a> {
    wallet_core: &'a dyn WalletCoreTokens,
    config: CoreConfig,
}

impl<'a> TokenManagementService<'a> {
    pub fn new(wallet_core: &'a dyn WalletCoreTokens, config: CoreConfig) -> Self {
        Self { wallet_core, config }
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Merged token list for a wallet
    pub fn visible_tokens(&self, wallet_id: &str, state: &TokenState) -> Result<VisibleTokenSet, TokenCoreError> {
        let meta_tokens = self.wallet_core.meta_tokens(wallet_id)?;
        Ok(merge_visible_tokens(&meta_tokens, &state.custom_tokens))
    }

    fn check_code_length(&self, token: &CustomTokenInfo) -> Result<(), EditTokenError> {
        let max = self.config.max_token_code_characters;
        if token.currency_code.chars().count() > max {
            return Err(EditTokenError::CurrencyCodeTooLong {
                code: token.currency_code.clone(),
                max,
            });
        }
        Ok(())
    }

    fn rejected(&self, wallet_id: &str, intent: &str, err: EditTokenError) -> TokenCoreError {
        log::warn!("Rejected {} for wallet {}: {}", intent, wallet_id, err);
        err.into()
    }

    /// Add a new custom token to a wallet
    pub fn add_token(&self, wallet_id: &str, state: &TokenState, form: &TokenForm) -> Result<TokenState, TokenCoreError> {
        let visible = self.visible_tokens(wallet_id, state)?;
        let token = validate_add(form, &visible)
            .and_then(|token| self.check_code_length(&token).map(|_| token))
            .map_err(|err| self.rejected(wallet_id, "add token", err))?;

        self.wallet_core.add_custom_token(wallet_id, &token)?;
        log::info!("Added custom token {} to wallet {}", token.currency_code, wallet_id);
        Ok(state.reduce(&TokenAction::AddCustomToken(token)))
    }

    /// Edit the custom token stored under `existing_code`
    pub fn edit_token(
        &self,
        wallet_id: &str,
        state: &TokenState,
        existing_code: &str,
        form: &TokenForm,
    ) -> Result<TokenState, TokenCoreError> {
        let visible = self.visible_tokens(wallet_id, state)?;
        let token = prepare_edit(form, existing_code, &visible)
            .and_then(|token| self.check_code_length(&token).map(|_| token))
            .map_err(|err| self.rejected(wallet_id, "edit token", err))?;

        let old_currency_code = normalize_currency_code(existing_code);
        self.wallet_core.edit_custom_token(wallet_id, &token, &old_currency_code)?;
        log::info!(
            "Edited custom token {} -> {} on wallet {}",
            old_currency_code,
            token.currency_code,
            wallet_id
        );
        Ok(state.reduce(&TokenAction::EditCustomToken { old_currency_code, token }))
    }

    /// Delete a custom token; the stored record is hidden, not dropped
    pub fn delete_token(&self, wallet_id: &str, state: &TokenState, currency_code: &str) -> Result<TokenState, TokenCoreError> {
        validate_delete(currency_code, &state.custom_tokens)
            .map_err(|err| self.rejected(wallet_id, "delete token", err))?;

        let currency_code = normalize_currency_code(currency_code);
        self.wallet_core.delete_custom_token(wallet_id, &currency_code)?;
        log::info!("Deleted custom token {} from wallet {}", currency_code, wallet_id);
        Ok(state.reduce(&TokenAction::DeleteCustomToken { currency_code }))
    }
}

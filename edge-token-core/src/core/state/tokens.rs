//! Custom token settings slice

use serde::{Deserialize, Serialize};
use crate::domain::entities::CustomTokenInfo;
use crate::shared::types::{same_currency_code, CurrencyCode};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenAction {
    AddCustomToken(CustomTokenInfo),
    #[serde(rename_all = "camelCase")]
    EditCustomToken { old_currency_code: CurrencyCode, token: CustomTokenInfo },
    #[serde(rename_all = "camelCase")]
    DeleteCustomToken { currency_code: CurrencyCode },
}

/// Snapshot of the user's custom tokens. Deleted tokens stay in the list
/// with `is_visible = false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenState {
    pub custom_tokens: Vec<CustomTokenInfo>,
}

impl TokenState {
    pub fn new(custom_tokens: Vec<CustomTokenInfo>) -> Self {
        Self { custom_tokens }
    }

    fn position(&self, currency_code: &str) -> Option<usize> {
        self.custom_tokens
            .iter()
            .position(|token| same_currency_code(&token.currency_code, currency_code))
    }

    pub fn get(&self, currency_code: &str) -> Option<&CustomTokenInfo> {
        self.position(currency_code).map(|index| &self.custom_tokens[index])
    }

    /// Apply an action and return the resulting snapshot
    pub fn reduce(&self, action: &TokenAction) -> TokenState {
        let mut next = self.clone();
        match action {
            TokenAction::AddCustomToken(token) => match next.position(&token.currency_code) {
                // Re-adding a previously deleted token revives it
                Some(index) => next.custom_tokens[index] = token.clone(),
                None => next.custom_tokens.push(token.clone()),
            },
            TokenAction::EditCustomToken { old_currency_code, token } => {
                // A hidden record may already hold the new code
                if !same_currency_code(old_currency_code, &token.currency_code) {
                    next.custom_tokens
                        .retain(|t| !same_currency_code(&t.currency_code, &token.currency_code));
                }
                match next.position(old_currency_code) {
                    Some(index) => next.custom_tokens[index] = token.clone(),
                    None => next.custom_tokens.push(token.clone()),
                }
            }
            TokenAction::DeleteCustomToken { currency_code } => {
                if let Some(index) = next.position(currency_code) {
                    next.custom_tokens[index].is_visible = false;
                }
            }
        }
        next
    }
}

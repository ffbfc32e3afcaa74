//! Token registry reconciliation
//!
//! Merges a wallet's built-in tokens with the user's custom tokens and
//! validates add / edit / delete submissions against the merged view.
//! Every function here is pure: callers pass snapshots in and get values
//! back.

use crate::core::denomination::{decimal_places_to_multiplier, validate_decimal_places};
use crate::domain::entities::{CustomTokenInfo, MetaToken, TokenEntry, TokenForm, TokenSource, VisibleTokenSet};
use crate::shared::constants::{
    FIELD_CONTRACT_ADDRESS, FIELD_CURRENCY_CODE, FIELD_CURRENCY_NAME, FIELD_DECIMAL_PLACES,
};
use crate::shared::error::EditTokenError;
use crate::shared::types::{normalize_contract_address, normalize_currency_code, same_currency_code};

/// Merge built-in and custom tokens into the list shown to the user.
///
/// Built-ins keep their input order. A visible custom token replaces the
/// entry with the same currency code in place, otherwise it is appended.
/// Hidden custom tokens are skipped and never hide a built-in.
pub fn merge_visible_tokens(meta_tokens: &[MetaToken], custom_tokens: &[CustomTokenInfo]) -> VisibleTokenSet {
    let mut entries: Vec<TokenEntry> = Vec::with_capacity(meta_tokens.len() + custom_tokens.len());

    for meta in meta_tokens {
        let entry = TokenEntry::from(meta);
        // Built-in lists should already be unique; first one wins if not
        if !entries.iter().any(|e| e.currency_code == entry.currency_code) {
            entries.push(entry);
        }
    }

    for custom in custom_tokens.iter().filter(|token| token.is_visible) {
        let code = normalize_currency_code(&custom.currency_code);
        match entries.iter().position(|e| e.currency_code == code) {
            Some(index) => {
                let overrides_built_in = match entries[index].source {
                    TokenSource::BuiltIn => true,
                    TokenSource::Custom { overrides_built_in } => overrides_built_in,
                };
                entries[index] = TokenEntry::from_custom(custom, overrides_built_in);
            }
            None => entries.push(TokenEntry::from_custom(custom, false)),
        }
    }

    VisibleTokenSet::from_entries(entries)
}

fn check_complete(proposed: &TokenForm) -> Result<(), EditTokenError> {
    let fields = [
        (FIELD_CURRENCY_NAME, proposed.currency_name.as_str()),
        (FIELD_CURRENCY_CODE, proposed.currency_code.as_str()),
        (FIELD_DECIMAL_PLACES, proposed.decimal_places.as_str()),
        (FIELD_CONTRACT_ADDRESS, proposed.contract_address.as_str()),
    ];
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((field, _)) => Err(EditTokenError::incomplete_form(*field)),
        None => Ok(()),
    }
}

fn normalized_record(proposed: &TokenForm) -> Result<CustomTokenInfo, EditTokenError> {
    Ok(CustomTokenInfo {
        currency_code: normalize_currency_code(&proposed.currency_code),
        currency_name: proposed.currency_name.trim().to_string(),
        contract_address: normalize_contract_address(&proposed.contract_address),
        multiplier: decimal_places_to_multiplier(&proposed.decimal_places)?,
        is_visible: true,
    })
}

/// Validate an edit of the token currently stored under `existing_code`.
///
/// Checks run in order: duplicate currency code (only when the code
/// changes), missing fields, then decimal places.
pub fn validate_edit(
    proposed: &TokenForm,
    existing_code: &str,
    visible_tokens: &VisibleTokenSet,
) -> Result<(), EditTokenError> {
    let code = normalize_currency_code(&proposed.currency_code);

    if !code.is_empty() && !same_currency_code(&code, existing_code) {
        let taken = visible_tokens
            .iter()
            .filter(|entry| !same_currency_code(&entry.currency_code, existing_code))
            .any(|entry| same_currency_code(&entry.currency_code, &code));
        if taken {
            return Err(EditTokenError::duplicate_currency_code(code));
        }
    }

    check_complete(proposed)?;
    validate_decimal_places(&proposed.decimal_places)
}

/// Validate an edit and return the record to hand to the wallet core
pub fn prepare_edit(
    proposed: &TokenForm,
    existing_code: &str,
    visible_tokens: &VisibleTokenSet,
) -> Result<CustomTokenInfo, EditTokenError> {
    validate_edit(proposed, existing_code, visible_tokens)?;
    normalized_record(proposed)
}

/// Validate a brand new custom token and return its normalized record
pub fn validate_add(proposed: &TokenForm, visible_tokens: &VisibleTokenSet) -> Result<CustomTokenInfo, EditTokenError> {
    check_complete(proposed)?;

    let code = normalize_currency_code(&proposed.currency_code);
    if visible_tokens.contains_code(&code) {
        return Err(EditTokenError::duplicate_currency_code(code));
    }

    let address = normalize_contract_address(&proposed.contract_address);
    if let Some(clash) = visible_tokens
        .iter()
        .find(|entry| entry.contract_address.eq_ignore_ascii_case(&address))
    {
        return Err(EditTokenError::DuplicateContractAddress {
            currency_code: clash.currency_code.clone(),
            contract_address: address,
        });
    }

    normalized_record(proposed)
}

/// Check that a delete targets a custom token that still exists
pub fn validate_delete(currency_code: &str, registry: &[CustomTokenInfo]) -> Result<(), EditTokenError> {
    let exists = registry
        .iter()
        .any(|token| token.is_visible && same_currency_code(&token.currency_code, currency_code));
    if exists {
        Ok(())
    } else {
        Err(EditTokenError::token_not_found(normalize_currency_code(currency_code)))
    }
}

#[cfg(test)]
mod scenarios;

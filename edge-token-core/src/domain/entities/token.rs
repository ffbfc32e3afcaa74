//! Token entities for the token core

use serde::{Deserialize, Serialize};
use crate::shared::types::{
    normalize_contract_address, normalize_currency_code, same_currency_code, ContractAddress, CurrencyCode,
    Denomination, Multiplier,
};

/// Built-in token descriptor supplied by the wallet core
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MetaToken {
    pub currency_code: CurrencyCode,
    pub currency_name: String,
    pub contract_address: ContractAddress,
    #[serde(default)]
    pub denominations: Vec<Denomination>,
}

impl MetaToken {
    /// Multiplier of the primary denomination, if the plugin supplied one
    pub fn multiplier(&self) -> Option<&str> {
        self.denominations.first().map(|d| d.multiplier.as_str())
    }
}

/// User-added token stored in account settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomTokenInfo {
    pub currency_code: CurrencyCode,
    pub currency_name: String,
    pub contract_address: ContractAddress,
    pub multiplier: Multiplier,
    #[serde(default = "default_visible")]
    pub is_visible: bool,
}

fn default_visible() -> bool {
    true
}

impl CustomTokenInfo {
    /// Decimal places implied by the stored multiplier
    pub fn decimal_places(&self) -> Result<String, crate::shared::error::EditTokenError> {
        crate::core::denomination::multiplier_to_decimal_places(&self.multiplier)
    }
}

/// Raw add / edit form as typed by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenForm {
    pub currency_name: String,
    pub currency_code: String,
    pub contract_address: String,
    pub decimal_places: String,
}

impl TokenForm {
    pub fn new(
        currency_name: impl Into<String>,
        currency_code: impl Into<String>,
        contract_address: impl Into<String>,
        decimal_places: impl Into<String>,
    ) -> Self {
        Self {
            currency_name: currency_name.into(),
            currency_code: currency_code.into(),
            contract_address: contract_address.into(),
            decimal_places: decimal_places.into(),
        }
    }

    /// Pre-fill the edit screen from a stored token
    pub fn from_custom_token(token: &CustomTokenInfo) -> Result<Self, crate::shared::error::EditTokenError> {
        Ok(Self {
            currency_name: token.currency_name.clone(),
            currency_code: token.currency_code.clone(),
            contract_address: token.contract_address.clone(),
            decimal_places: token.decimal_places()?,
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TokenSource {
    BuiltIn,
    #[serde(rename_all = "camelCase")]
    Custom { overrides_built_in: bool },
}

/// One row of the merged token list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenEntry {
    pub currency_code: CurrencyCode,
    pub currency_name: String,
    pub contract_address: ContractAddress,
    pub multiplier: Option<Multiplier>,
    pub source: TokenSource,
}

impl From<&MetaToken> for TokenEntry {
    fn from(token: &MetaToken) -> Self {
        Self {
            currency_code: normalize_currency_code(&token.currency_code),
            currency_name: token.currency_name.clone(),
            contract_address: token.contract_address.trim().to_string(),
            multiplier: token.multiplier().map(str::to_string),
            source: TokenSource::BuiltIn,
        }
    }
}

impl TokenEntry {
    pub fn from_custom(token: &CustomTokenInfo, overrides_built_in: bool) -> Self {
        Self {
            currency_code: normalize_currency_code(&token.currency_code),
            currency_name: token.currency_name.clone(),
            contract_address: token.contract_address.trim().to_string(),
            multiplier: Some(token.multiplier.clone()),
            source: TokenSource::Custom { overrides_built_in },
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self.source, TokenSource::Custom { .. })
    }
}

/// Deduplicated, visibility-filtered token list shown to the user.
/// Currency codes are unique and uppercase, however the set was built.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "Vec<TokenEntry>", into = "Vec<TokenEntry>")]
pub struct VisibleTokenSet {
    entries: Vec<TokenEntry>,
}

impl VisibleTokenSet {
    /// Normalize codes and addresses; a later entry with an already seen
    /// code replaces the earlier one in place
    pub(crate) fn from_entries(entries: Vec<TokenEntry>) -> Self {
        let mut normalized: Vec<TokenEntry> = Vec::with_capacity(entries.len());
        for mut entry in entries {
            entry.currency_code = normalize_currency_code(&entry.currency_code);
            entry.contract_address = normalize_contract_address(&entry.contract_address);
            match normalized.iter().position(|e| e.currency_code == entry.currency_code) {
                Some(index) => normalized[index] = entry,
                None => normalized.push(entry),
            }
        }
        Self { entries: normalized }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TokenEntry> {
        self.entries.iter()
    }

    pub fn get(&self, currency_code: &str) -> Option<&TokenEntry> {
        self.entries
            .iter()
            .find(|entry| same_currency_code(&entry.currency_code, currency_code))
    }

    pub fn contains_code(&self, currency_code: &str) -> bool {
        self.get(currency_code).is_some()
    }

    pub fn currency_codes(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.currency_code.as_str()).collect()
    }
}

impl From<Vec<TokenEntry>> for VisibleTokenSet {
    fn from(entries: Vec<TokenEntry>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<VisibleTokenSet> for Vec<TokenEntry> {
    fn from(set: VisibleTokenSet) -> Self {
        set.entries
    }
}

impl<'a> IntoIterator for &'a VisibleTokenSet {
    type Item = &'a TokenEntry;
    type IntoIter = std::slice::Iter<'a, TokenEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_token_defaults_to_visible() {
        let json = r#"{
            "currencyCode": "FOO",
            "currencyName": "Foo Token",
            "contractAddress": "0xF00",
            "multiplier": "1000000"
        }"#;
        let token: CustomTokenInfo = serde_json::from_str(json).expect("Failed to parse custom token");
        assert!(token.is_visible);
        assert_eq!(token.decimal_places().expect("Failed to read decimals"), "6");
    }

    #[test]
    fn test_form_from_custom_token() {
        let token = CustomTokenInfo {
            currency_code: "REP".to_string(),
            currency_name: "Augur".to_string(),
            contract_address: "0x1985365e9f78359a9B6AD760e32412f4a445E862".to_string(),
            multiplier: "1000000000000000000".to_string(),
            is_visible: true,
        };
        let form = TokenForm::from_custom_token(&token).expect("Failed to build form");
        assert_eq!(form.decimal_places, "18");
        assert_eq!(form.currency_code, "REP");
    }

    #[test]
    fn test_entry_from_meta_token_normalizes() {
        let meta = MetaToken {
            currency_code: "usdt".to_string(),
            currency_name: "Tether".to_string(),
            contract_address: " 0xdAC17F958D2ee523a2206206994597C13D831ec7 ".to_string(),
            denominations: vec![Denomination::new("USDT", "1000000")],
        };
        let entry = TokenEntry::from(&meta);
        assert_eq!(entry.currency_code, "USDT");
        assert_eq!(entry.contract_address, "0xdAC17F958D2ee523a2206206994597C13D831ec7");
        assert_eq!(entry.multiplier.as_deref(), Some("1000000"));
        assert!(!entry.is_custom());
    }

    #[test]
    fn test_visible_set_lookup_is_case_insensitive() {
        let set = VisibleTokenSet::from_entries(vec![TokenEntry {
            currency_code: "DAI".to_string(),
            currency_name: "Dai".to_string(),
            contract_address: "0x6B17".to_string(),
            multiplier: None,
            source: TokenSource::BuiltIn,
        }]);
        assert!(set.contains_code("dai"));
        assert!(!set.contains_code("MKR"));
        assert_eq!(set.currency_codes(), vec!["DAI"]);
    }

    #[test]
    fn test_visible_set_from_json_is_normalized() {
        let json = r#"[
            {"currencyCode":"rep","currencyName":"Augur","contractAddress":" 0x1 ","multiplier":null,"source":{"kind":"builtIn"}},
            {"currencyCode":"FOO","currencyName":"Foo","contractAddress":"0x3","multiplier":"100","source":{"kind":"custom","overridesBuiltIn":false}},
            {"currencyCode":"Rep","currencyName":"Augur v2","contractAddress":"0x9","multiplier":"100","source":{"kind":"custom","overridesBuiltIn":true}}
        ]"#;
        let set: VisibleTokenSet = serde_json::from_str(json).expect("Failed to parse visible set");
        assert_eq!(set.currency_codes(), vec!["REP", "FOO"]);
        let rep = set.get("REP").expect("REP should be present");
        assert_eq!(rep.currency_name, "Augur v2");
        assert_eq!(rep.contract_address, "0x9");

        let back = serde_json::to_value(&set).expect("Failed to serialize visible set");
        assert_eq!(back.as_array().map(Vec::len), Some(2));
        assert_eq!(back[0]["currencyCode"], "REP");
    }
}

use serde::{Deserialize, Serialize};

// Basic types for token operations
pub type WalletId = String;
pub type CurrencyCode = String;
pub type ContractAddress = String;
pub type Multiplier = String;

/// A named unit of a token and its power-of-ten scale relative to the
/// smallest native unit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Denomination {
    pub name: String,
    pub multiplier: Multiplier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl Denomination {
    pub fn new(name: impl Into<String>, multiplier: impl Into<Multiplier>) -> Self {
        Self {
            name: name.into(),
            multiplier: multiplier.into(),
            symbol: None,
        }
    }
}

/// Uppercase a currency code for comparison or persistence
pub fn normalize_currency_code(code: &str) -> CurrencyCode {
    code.trim().to_uppercase()
}

/// Trim a contract address for comparison or persistence
pub fn normalize_contract_address(address: &str) -> ContractAddress {
    address.trim().to_string()
}

/// Case-insensitive currency code equality
pub fn same_currency_code(a: &str, b: &str) -> bool {
    normalize_currency_code(a) == normalize_currency_code(b)
}

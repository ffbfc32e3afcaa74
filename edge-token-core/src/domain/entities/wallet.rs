//! Wallet snapshot entity
//!
//! A read-only copy of what the wallet core reports about one wallet,
//! kept in the UI wallets slice.

use serde::{Deserialize, Serialize};
use crate::shared::types::{CurrencyCode, WalletId};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WalletSnapshot {
    pub id: WalletId,
    pub name: String,
    pub wallet_type: String,
    pub currency_code: CurrencyCode,
    #[serde(default)]
    pub archived: bool,
}

impl WalletSnapshot {
    pub fn new(id: impl Into<WalletId>, name: impl Into<String>, wallet_type: impl Into<String>, currency_code: impl Into<CurrencyCode>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            wallet_type: wallet_type.into(),
            currency_code: currency_code.into(),
            archived: false,
        }
    }
}

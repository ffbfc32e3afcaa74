//! UI wallets slice
//!
//! Mirrors the wallets known to the wallet core plus the current selection.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::domain::entities::WalletSnapshot;
use crate::shared::types::WalletId;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WalletAction {
    UpsertWallet(WalletSnapshot),
    DeleteWallet(WalletId),
    SelectWalletId(WalletId),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WalletsState {
    pub by_id: BTreeMap<WalletId, WalletSnapshot>,
    pub selected_wallet_id: Option<WalletId>,
}

impl WalletsState {
    pub fn reduce(&self, action: &WalletAction) -> WalletsState {
        let mut next = self.clone();
        match action {
            WalletAction::UpsertWallet(wallet) => {
                next.by_id.insert(wallet.id.clone(), wallet.clone());
            }
            WalletAction::DeleteWallet(wallet_id) => {
                next.by_id.remove(wallet_id);
            }
            WalletAction::SelectWalletId(wallet_id) => {
                next.selected_wallet_id = Some(wallet_id.clone());
            }
        }
        next
    }

    pub fn selected_wallet(&self) -> Option<&WalletSnapshot> {
        self.selected_wallet_id.as_ref().and_then(|id| self.by_id.get(id))
    }
}

/// Actions for a wallet that became active. The first active wallet is
/// selected automatically.
pub fn activate_wallet(state: &WalletsState, wallet: WalletSnapshot) -> Vec<WalletAction> {
    let mut actions = Vec::with_capacity(2);
    if state.selected_wallet_id.is_none() {
        actions.push(WalletAction::SelectWalletId(wallet.id.clone()));
    }
    actions.push(WalletAction::UpsertWallet(wallet));
    actions
}

/// Archived wallets keep their entry; selection is left alone
pub fn archive_wallet(wallet: WalletSnapshot) -> Vec<WalletAction> {
    vec![WalletAction::UpsertWallet(wallet)]
}

/// Deleting the selected wallet does not pick a replacement
pub fn delete_wallet(wallet_id: &str) -> Vec<WalletAction> {
    vec![WalletAction::DeleteWallet(wallet_id.to_string())]
}

/// Re-read a wallet from the core's snapshot, if the core still has it
pub fn refresh_wallet(core_wallets: &BTreeMap<WalletId, WalletSnapshot>, wallet_id: &str) -> Vec<WalletAction> {
    match core_wallets.get(wallet_id) {
        Some(wallet) => vec![WalletAction::UpsertWallet(wallet.clone())],
        None => {
            log::debug!("Refresh skipped, wallet core has no wallet {}", wallet_id);
            Vec::new()
        }
    }
}

/// Run a batch of actions produced by the helpers above
pub fn dispatch(state: &WalletsState, actions: &[WalletAction]) -> WalletsState {
    actions.iter().fold(state.clone(), |state, action| state.reduce(action))
}

//! End-to-end registry scenarios and generated properties

use super::*;
use crate::core::denomination::{decimal_places_to_multiplier, multiplier_to_decimal_places};
use crate::core::state::{TokenAction, TokenState};
use proptest::collection::btree_set;
use proptest::prelude::*;

fn meta_token(code: &str) -> MetaToken {
    MetaToken {
        currency_code: code.to_string(),
        currency_name: format!("{} token", code),
        contract_address: format!("0xmeta{}", code),
        denominations: Vec::new(),
    }
}

fn custom_token(code: &str, visible: bool) -> CustomTokenInfo {
    CustomTokenInfo {
        currency_code: code.to_string(),
        currency_name: format!("{} custom", code),
        contract_address: format!("0xcustom{}", code),
        multiplier: "1000".to_string(),
        is_visible: visible,
    }
}

#[test]
fn edit_built_in_code_in_place_trims_address() {
    let visible = merge_visible_tokens(&[meta_token("ETH")], &[]);
    let form = TokenForm::new("Ether", "ETH", " 0xABC ", "18");

    assert!(validate_edit(&form, "ETH", &visible).is_ok());
    let record = prepare_edit(&form, "ETH", &visible).expect("Edit should be accepted");
    assert_eq!(record.contract_address, "0xABC");
    assert_eq!(record.multiplier, "1000000000000000000");
}

#[test]
fn delete_unknown_code_is_not_found() {
    let registry = [custom_token("FOO", true)];
    assert_eq!(validate_delete("BAR", &registry), Err(EditTokenError::token_not_found("BAR")));
}

#[test]
fn decimal_places_garbage_is_rejected() {
    assert!(matches!(
        decimal_places_to_multiplier("abc"),
        Err(EditTokenError::InvalidDenomination(_))
    ));
}

#[test]
fn deleted_token_drops_out_of_merged_view() {
    let state = TokenState::new(vec![custom_token("FOO", true), custom_token("BAR", true)]);
    assert!(validate_delete("FOO", &state.custom_tokens).is_ok());
    let state = state.reduce(&TokenAction::DeleteCustomToken { currency_code: "FOO".to_string() });

    let visible = merge_visible_tokens(&[meta_token("ETH")], &state.custom_tokens);
    assert_eq!(visible.currency_codes(), vec!["ETH", "BAR"]);
    assert_eq!(validate_delete("FOO", &state.custom_tokens), Err(EditTokenError::token_not_found("FOO")));
}

fn code_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{2,6}"
}

proptest! {
    #[test]
    fn disjoint_lists_merge_to_sum_of_visible(
        codes in btree_set(code_strategy(), 0..16),
        split in 0usize..16,
        hidden_mask in proptest::collection::vec(any::<bool>(), 16),
    ) {
        let codes: Vec<String> = codes.into_iter().collect();
        let split = split.min(codes.len());
        let metas: Vec<MetaToken> = codes[..split].iter().map(|c| meta_token(c)).collect();
        let customs: Vec<CustomTokenInfo> = codes[split..]
            .iter()
            .enumerate()
            .map(|(i, c)| custom_token(c, !hidden_mask[i]))
            .collect();

        let visible_customs = customs.iter().filter(|t| t.is_visible).count();
        let merged = merge_visible_tokens(&metas, &customs);
        prop_assert_eq!(merged.len(), metas.len() + visible_customs);
    }

    #[test]
    fn custom_fields_win_over_built_in(codes in btree_set(code_strategy(), 1..10)) {
        let metas: Vec<MetaToken> = codes.iter().map(|c| meta_token(c)).collect();
        let customs: Vec<CustomTokenInfo> = codes.iter().map(|c| custom_token(c, true)).collect();

        let merged = merge_visible_tokens(&metas, &customs);
        prop_assert_eq!(merged.len(), codes.len());
        for custom in &customs {
            let entry = merged.get(&custom.currency_code).unwrap();
            prop_assert_eq!(&entry.currency_name, &custom.currency_name);
            prop_assert_eq!(&entry.contract_address, &custom.contract_address);
            prop_assert_eq!(entry.multiplier.as_deref(), Some(custom.multiplier.as_str()));
        }
    }

    #[test]
    fn merged_codes_are_unique(
        meta_codes in proptest::collection::vec(code_strategy(), 0..8),
        custom_codes in proptest::collection::vec(code_strategy(), 0..8),
    ) {
        let metas: Vec<MetaToken> = meta_codes.iter().map(|c| meta_token(c)).collect();
        let customs: Vec<CustomTokenInfo> = custom_codes.iter().map(|c| custom_token(&c.to_lowercase(), true)).collect();
        let merged = merge_visible_tokens(&metas, &customs);

        let mut codes = merged.currency_codes();
        let total = codes.len();
        codes.sort_unstable();
        codes.dedup();
        prop_assert_eq!(codes.len(), total);
    }

    #[test]
    fn multiplier_roundtrip_is_identity(places in 0u32..=18) {
        let multiplier = decimal_places_to_multiplier(&places.to_string()).unwrap();
        prop_assert_eq!(multiplier_to_decimal_places(&multiplier).unwrap(), places.to_string());
    }

    #[test]
    fn edit_to_other_visible_code_is_duplicate(codes in btree_set(code_strategy(), 2..8)) {
        let codes: Vec<String> = codes.into_iter().collect();
        let customs: Vec<CustomTokenInfo> = codes.iter().map(|c| custom_token(c, true)).collect();
        let visible = merge_visible_tokens(&[], &customs);

        let (editing, target) = (&codes[0], &codes[1]);
        let taken = TokenForm::new("Renamed", target.to_lowercase(), "0x1", "6");
        prop_assert_eq!(
            validate_edit(&taken, editing, &visible),
            Err(EditTokenError::duplicate_currency_code(target.clone()))
        );

        let unchanged = TokenForm::new("Renamed", editing.clone(), "0x1", "6");
        prop_assert!(validate_edit(&unchanged, editing, &visible).is_ok());
    }
}

use etoken_builder::types::constants::{MAX_ALP_ATOMS, MAX_SLP_ATOMS};
use etoken_builder::types::TokenProtocol;
use etoken_builder::utils::amounts::{
    decimalize_token_amount, get_max_decimalized_qty, undecimalize_token_amount,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn decimalize_undecimalize_roundtrip(atoms in 0u128..=MAX_SLP_ATOMS, decimals in 0u8..=9) {
        let decimalized = decimalize_token_amount(atoms, decimals).unwrap();
        prop_assert_eq!(undecimalize_token_amount(&decimalized, decimals).unwrap(), atoms);
    }

    #[test]
    fn decimalized_has_exactly_decimals_fraction_digits(atoms in any::<u64>(), decimals in 1u8..=9) {
        let decimalized = decimalize_token_amount(atoms as u128, decimals).unwrap();
        let (_, fraction) = decimalized.split_once('.').unwrap();
        prop_assert_eq!(fraction.len(), decimals as usize);
    }

    #[test]
    fn extra_precision_is_rejected(integer in 0u32..1_000_000, decimals in 0u8..=8) {
        let amount = format!("{}.{}1", integer, "0".repeat(decimals as usize));
        prop_assert!(undecimalize_token_amount(&amount, decimals).is_err());
    }
}

#[test]
fn test_max_qty_undecimalizes_to_ceiling() {
    for decimals in 0..=9 {
        let slp = get_max_decimalized_qty(TokenProtocol::Slp, decimals).unwrap();
        assert_eq!(undecimalize_token_amount(&slp, decimals).unwrap(), MAX_SLP_ATOMS);
        let alp = get_max_decimalized_qty(TokenProtocol::Alp, decimals).unwrap();
        assert_eq!(undecimalize_token_amount(&alp, decimals).unwrap(), MAX_ALP_ATOMS);
    }
    assert_eq!(
        get_max_decimalized_qty(TokenProtocol::Slp, 9).unwrap(),
        "18446744073.709551615"
    );
}

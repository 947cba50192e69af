use crate::common::{slp_utxo, token_id, xec_utxo};
use etoken_builder::errors::TokenError;
use etoken_builder::selector::get_send_token_inputs;
use etoken_builder::types::{Atoms, TokenUtxo};
use proptest::prelude::*;

fn wallet(amounts: &[u64]) -> Vec<TokenUtxo> {
    let mut utxos = vec![xec_utxo(10_000, 0)];
    utxos.extend(
        amounts
            .iter()
            .enumerate()
            .map(|(idx, atoms)| slp_utxo(*atoms as Atoms, idx as u32 + 1)),
    );
    utxos
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn selection_covers_request(
        amounts in prop::collection::vec(1u64..1_000_000, 1..20),
        fraction in 0.0f64..=1.0,
    ) {
        let balance: Atoms = amounts.iter().map(|a| *a as Atoms).sum();
        let requested = ((balance as f64 * fraction) as Atoms).clamp(1, balance);
        let utxos = wallet(&amounts);

        let selection = get_send_token_inputs(&utxos, &token_id(), &requested.to_string(), 0).unwrap();
        let total = selection.total_input_atoms();
        prop_assert!(total >= requested);
        prop_assert_eq!(selection.send_amounts[0], requested);

        let change = total - requested;
        if change == 0 {
            prop_assert_eq!(selection.send_amounts.len(), 1);
        } else {
            prop_assert_eq!(selection.send_amounts.clone(), vec![requested, change]);
        }

        // Stops at the first input that covers the request
        let without_last: Atoms = selection.token_inputs[..selection.token_inputs.len() - 1]
            .iter()
            .map(|utxo| utxo.token_atoms())
            .sum();
        prop_assert!(without_last < requested);
    }

    #[test]
    fn over_request_always_fails(
        amounts in prop::collection::vec(1u64..1_000_000, 1..20),
        excess in 1u64..1_000,
    ) {
        let balance: Atoms = amounts.iter().map(|a| *a as Atoms).sum();
        let requested = balance + excess as Atoms;
        let result = get_send_token_inputs(&wallet(&amounts), &token_id(), &requested.to_string(), 0);
        let is_insufficient = matches!(result, Err(TokenError::InsufficientBalance { .. }));
        prop_assert!(is_insufficient);
    }
}

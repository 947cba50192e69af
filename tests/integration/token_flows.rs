use crate::common::{destination, mint_baton, slp_utxo, token_id, token_utxo, xec_utxo, TOKEN_ID};
use etoken_builder::errors::TokenError;
use etoken_builder::outputs::{
    burn_target_outputs, genesis_target_outputs, mint_target_outputs,
    nft_parent_fan_tx_target_outputs, send_target_outputs,
};
use etoken_builder::parser::{parse_token_script, AlpTx, ParsedTokenScript, SlpTx};
use etoken_builder::selector::{get_mint_batons, get_send_token_inputs};
use etoken_builder::types::{
    is_token_dust_change_output, Atoms, GenesisInfo, TargetOutput, TokenType,
};
use etoken_builder::utils::amounts::{get_max_decimalized_slp_qty, undecimalize_token_amount};
use proptest::prelude::*;

fn op_return_hex(outputs: &[TargetOutput]) -> String {
    assert_eq!(outputs[0].sats(), 0);
    hex::encode(outputs[0].script().unwrap().as_bytes())
}

fn parsed(outputs: &[TargetOutput]) -> ParsedTokenScript {
    parse_token_script(outputs[0].script().unwrap())
        .unwrap()
        .unwrap()
}

#[test]
fn test_send_fifteen_from_three_tens() {
    assert_eq!(undecimalize_token_amount("15", 0).unwrap(), 15);

    let utxos = vec![
        xec_utxo(50_000, 0),
        slp_utxo(10, 1),
        slp_utxo(10, 2),
        slp_utxo(10, 3),
    ];
    let selection = get_send_token_inputs(&utxos, &token_id(), "15", 0).unwrap();
    assert_eq!(
        selection
            .token_inputs
            .iter()
            .map(|utxo| utxo.outpoint.out_idx)
            .collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert_eq!(selection.send_amounts, vec![15, 5]);

    let outputs = send_target_outputs(&selection, destination()).unwrap();
    assert_eq!(
        op_return_hex(&outputs),
        format!(
            "6a04534c500001010453454e4420{}08000000000000000f080000000000000005",
            TOKEN_ID
        )
    );
    assert_eq!(outputs.len(), 3);
    assert_eq!(outputs[1], TargetOutput::dust_to(destination()));
    assert!(is_token_dust_change_output(&outputs[2]));
}

#[test]
fn test_insufficient_balance_message() {
    let utxos: Vec<_> = (0..3).map(|idx| slp_utxo(100_000_000, idx)).collect();
    let err = get_send_token_inputs(&utxos, &token_id(), "35", 7).unwrap_err();
    assert_eq!(
        err.to_string(),
        "tokenUtxos have insufficient balance 30.0000000 to send 35.0000000"
    );
}

#[test]
fn test_max_slp_qty() {
    assert_eq!(get_max_decimalized_slp_qty(0).unwrap(), "18446744073709551615");
    assert_eq!(get_max_decimalized_slp_qty(9).unwrap(), "18446744073.709551615");
}

#[test]
fn test_genesis_rejects_baton_at_index_one() {
    let info = GenesisInfo {
        token_ticker: "TST".to_string(),
        token_name: "Test".to_string(),
        decimals: 2,
        ..GenesisInfo::default()
    };
    for token_type in [TokenType::SlpFungible, TokenType::AlpStandard] {
        assert_eq!(
            genesis_target_outputs(token_type, &info, 100, Some(1)),
            Err(TokenError::UnsupportedMintBatonPosition(1))
        );
    }
}

#[test]
fn test_burn_always_keeps_a_value_output() {
    for token_type in [TokenType::SlpFungible, TokenType::AlpStandard] {
        let utxos = vec![
            token_utxo(token_type, 10, 0),
            token_utxo(token_type, 10, 1),
        ];
        for qty in ["10", "15", "20"] {
            let selection = get_send_token_inputs(&utxos, &token_id(), qty, 0).unwrap();
            let outputs = burn_target_outputs(&selection).unwrap();
            assert_eq!(outputs.len(), 2);
            assert!(is_token_dust_change_output(&outputs[1]));
        }
    }
}

#[test]
fn test_slp_burn_sends_back_only_the_change() {
    let utxos = vec![slp_utxo(10, 0), slp_utxo(10, 1)];
    let selection = get_send_token_inputs(&utxos, &token_id(), "15", 0).unwrap();
    let outputs = burn_target_outputs(&selection).unwrap();

    match parsed(&outputs) {
        ParsedTokenScript::Slp(data) => assert_eq!(
            data.tx,
            SlpTx::Send {
                token_id: token_id(),
                send_atoms_array: vec![5],
            }
        ),
        other => panic!("expected SLP, got {:?}", other),
    }
}

#[test]
fn test_alp_burn_is_explicit_on_the_wire() {
    let utxos = vec![token_utxo(TokenType::AlpStandard, 100, 0)];

    let selection = get_send_token_inputs(&utxos, &token_id(), "60", 0).unwrap();
    let ParsedTokenScript::Alp(sections) = parsed(&burn_target_outputs(&selection).unwrap())
    else {
        panic!("expected ALP");
    };
    assert_eq!(sections.len(), 2);
    assert_eq!(
        sections[0].tx,
        AlpTx::Burn {
            token_id: token_id(),
            burn_atoms: 60,
        }
    );
    assert_eq!(
        sections[1].tx,
        AlpTx::Send {
            token_id: token_id(),
            send_atoms_array: vec![40],
        }
    );

    // Exact burn has nothing to send back
    let selection = get_send_token_inputs(&utxos, &token_id(), "100", 0).unwrap();
    let ParsedTokenScript::Alp(sections) = parsed(&burn_target_outputs(&selection).unwrap())
    else {
        panic!("expected ALP");
    };
    assert_eq!(sections.len(), 1);
}

#[test]
fn test_mint_with_held_baton() {
    let utxos = vec![
        slp_utxo(10, 0),
        mint_baton(TokenType::SlpFungible, 1),
    ];
    assert_eq!(get_mint_batons(&utxos, &token_id()).len(), 1);

    for token_type in [TokenType::SlpFungible, TokenType::AlpStandard] {
        let outputs = mint_target_outputs(&token_id(), 2, "1.5", token_type).unwrap();
        assert_eq!(outputs.len(), 3);
        assert_eq!(outputs[0].sats(), 0);
        assert!(outputs[1..].iter().all(is_token_dust_change_output));
    }

    assert_eq!(
        mint_target_outputs(&token_id(), 2, "", TokenType::SlpFungible),
        Err(TokenError::EmptyAmount)
    );
}

#[test]
fn test_alp_send_parses_back() {
    let utxos = vec![
        token_utxo(TokenType::AlpStandard, 7, 0),
        token_utxo(TokenType::AlpStandard, 9, 1),
    ];
    let selection = get_send_token_inputs(&utxos, &token_id(), "12", 0).unwrap();
    let outputs = send_target_outputs(&selection, destination()).unwrap();
    assert!(op_return_hex(&outputs).starts_with("6a50"));

    let ParsedTokenScript::Alp(sections) = parsed(&outputs) else {
        panic!("expected ALP");
    };
    assert_eq!(
        sections[0].tx,
        AlpTx::Send {
            token_id: token_id(),
            send_atoms_array: vec![12, 4],
        }
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fan_out_never_exceeds_nineteen_outputs(
        amounts in prop::collection::vec(1u64..40, 1..10),
    ) {
        let total: Atoms = amounts.iter().map(|a| *a as Atoms).sum();
        prop_assume!(total >= 19);

        let inputs: Vec<_> = amounts
            .iter()
            .enumerate()
            .map(|(idx, atoms)| token_utxo(TokenType::SlpNft1Group, *atoms as Atoms, idx as u32))
            .collect();
        let outputs = nft_parent_fan_tx_target_outputs(&inputs).unwrap();
        prop_assert_eq!(outputs.len(), 20);
        prop_assert!(outputs[1..].iter().all(is_token_dust_change_output));
    }
}

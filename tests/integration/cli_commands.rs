use crate::common::{slp_utxo, token_id, write_snapshot, xec_utxo, DESTINATION_HEX, TOKEN_ID};
use etoken_builder::cli::commands::burn::BurnCommand;
use etoken_builder::cli::commands::decode::DecodeCommand;
use etoken_builder::cli::commands::genesis::GenesisCommand;
use etoken_builder::cli::commands::load_utxo_snapshot;
use etoken_builder::cli::commands::max_qty::MaxQtyCommand;
use etoken_builder::cli::commands::send::SendCommand;
use etoken_builder::config::{AppConfig, WalletConfig};
use etoken_builder::errors::{AppError, TokenError};
use etoken_builder::parser::ParsedTokenScript;
use etoken_builder::types::{TokenProtocol, TokenType};
use serde_json::json;

fn send_command(amount: &str) -> SendCommand {
    SendCommand {
        token_id: token_id(),
        amount: amount.to_string(),
        decimals: 0,
        destination: DESTINATION_HEX.to_string(),
        utxos: None,
    }
}

fn config_with_snapshot(path: &std::path::Path) -> AppConfig {
    AppConfig {
        wallet: WalletConfig {
            utxo_file: Some(path.to_path_buf()),
        },
        ..AppConfig::default()
    }
}

#[test]
fn test_snapshot_roundtrip_through_file() {
    let utxos = vec![xec_utxo(10_000, 0), slp_utxo(10, 1)];
    let snapshot = write_snapshot(&utxos);
    assert_eq!(load_utxo_snapshot(snapshot.path()).unwrap(), utxos);
}

#[test]
fn test_send_uses_configured_snapshot() {
    let snapshot = write_snapshot(&[slp_utxo(10, 0), slp_utxo(10, 1), slp_utxo(10, 2)]);
    let config = config_with_snapshot(snapshot.path());

    let plan = send_command("15").build(&config).unwrap();
    assert_eq!(plan.selection.token_inputs.len(), 2);

    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["selection"]["sendAmounts"], json!(["15", "5"]));
    assert_eq!(json["targetOutputs"][1]["script"], json!(DESTINATION_HEX));
    assert_eq!(json["targetOutputs"][2], json!({"sats": 546}));
}

#[test]
fn test_send_without_snapshot_fails() {
    assert!(matches!(
        send_command("1").build(&AppConfig::default()),
        Err(AppError::InvalidArgument(_))
    ));
}

#[test]
fn test_burn_flag_overrides_config() {
    let empty = write_snapshot(&[]);
    let funded = write_snapshot(&[slp_utxo(10, 0)]);
    let config = config_with_snapshot(empty.path());

    let mut command = BurnCommand {
        token_id: token_id(),
        amount: "4".to_string(),
        decimals: 0,
        utxos: None,
    };
    assert!(matches!(
        command.build(&config),
        Err(AppError::Token(TokenError::NoTokenUtxos { .. }))
    ));

    command.utxos = Some(funded.path().to_path_buf());
    let plan = command.build(&config).unwrap();
    assert_eq!(plan.target_outputs.len(), 2);
    assert_eq!(plan.selection.send_amounts, vec![4, 6]);
}

#[test]
fn test_max_qty_command() {
    let command = MaxQtyCommand {
        protocol: TokenProtocol::Alp,
        decimals: 4,
    };
    let json = serde_json::to_value(command.build().unwrap()).unwrap();
    assert_eq!(
        json,
        json!({"protocol": "ALP", "decimals": 4, "maxQty": "28147497671.0655"})
    );
}

#[test]
fn test_genesis_then_decode() {
    let genesis = GenesisCommand {
        token_type: TokenType::SlpFungible,
        ticker: "TST".to_string(),
        name: "Test Token".to_string(),
        url: "https://cashtab.com/".to_string(),
        hash: None,
        data: None,
        auth_pubkey: None,
        decimals: 2,
        initial_qty: "100.25".to_string(),
        mint_baton: true,
    };
    let outputs = genesis.build().unwrap();
    assert_eq!(outputs.len(), 3);

    let decode = DecodeCommand {
        script_hex: hex::encode(outputs[0].script().unwrap().as_bytes()),
    };
    let Some(ParsedTokenScript::Slp(data)) = decode.build().unwrap() else {
        panic!("expected an SLP genesis");
    };
    let json = serde_json::to_value(&data).unwrap();
    assert_eq!(json["txType"], json!("GENESIS"));
    assert_eq!(json["initialAtoms"], json!("10025"));
    assert_eq!(json["mintBatonOutIdx"], json!(2));
    assert_eq!(json["genesisInfo"]["tokenTicker"], json!("TST"));
}

#[test]
fn test_nft_child_genesis_requires_single_unit() {
    let mut genesis = GenesisCommand {
        token_type: TokenType::SlpNft1Child,
        ticker: "NFT".to_string(),
        name: "Child".to_string(),
        url: String::new(),
        hash: None,
        data: None,
        auth_pubkey: None,
        decimals: 0,
        initial_qty: "2".to_string(),
        mint_baton: false,
    };
    assert!(matches!(genesis.build(), Err(AppError::InvalidArgument(_))));

    genesis.initial_qty = "1".to_string();
    assert_eq!(genesis.build().unwrap().len(), 2);
}

#[test]
fn test_decode_non_token_script() {
    let decode = DecodeCommand {
        script_hex: format!("76a914{}88ac", &TOKEN_ID[..40]),
    };
    assert_eq!(decode.build().unwrap(), None);
}

//! Shared fixtures for the unit and integration test targets

#![allow(dead_code)]

use bitcoin::hashes::Hash;
use bitcoin::{ScriptBuf, Txid};
use etoken_builder::types::{Atoms, Outpoint, Token, TokenId, TokenType, TokenUtxo};
use std::io::Write;
use tempfile::NamedTempFile;

pub const TOKEN_ID: &str = "1111111111111111111111111111111111111111111111111111111111111111";
pub const OTHER_TOKEN_ID: &str = "2222222222222222222222222222222222222222222222222222222222222222";

/// P2PKH script used as a send destination
pub const DESTINATION_HEX: &str = "76a91495e79f51d4260bc0dc3ba7fb77c7be92d0fbdd1d88ac";

pub fn token_id() -> TokenId {
    TokenId::new(TOKEN_ID).unwrap()
}

pub fn destination() -> ScriptBuf {
    ScriptBuf::from_bytes(hex::decode(DESTINATION_HEX).unwrap())
}

fn outpoint(out_idx: u32) -> Outpoint {
    Outpoint {
        txid: Txid::from_byte_array([0xab; 32]),
        out_idx,
    }
}

pub fn token_utxo(token_type: TokenType, atoms: Atoms, out_idx: u32) -> TokenUtxo {
    TokenUtxo {
        outpoint: outpoint(out_idx),
        sats: 546,
        script: None,
        token: Some(Token {
            token_id: token_id(),
            token_type,
            atoms,
            is_mint_baton: false,
        }),
    }
}

pub fn slp_utxo(atoms: Atoms, out_idx: u32) -> TokenUtxo {
    token_utxo(TokenType::SlpFungible, atoms, out_idx)
}

pub fn mint_baton(token_type: TokenType, out_idx: u32) -> TokenUtxo {
    let mut utxo = token_utxo(token_type, 0, out_idx);
    if let Some(token) = utxo.token.as_mut() {
        token.is_mint_baton = true;
    }
    utxo
}

pub fn xec_utxo(sats: u64, out_idx: u32) -> TokenUtxo {
    TokenUtxo {
        outpoint: outpoint(out_idx),
        sats,
        script: None,
        token: None,
    }
}

/// Serialize `utxos` to a JSON snapshot file that lives as long as the handle
pub fn write_snapshot(utxos: &[TokenUtxo]) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(serde_json::to_string(utxos).unwrap().as_bytes())
        .unwrap();
    file
}

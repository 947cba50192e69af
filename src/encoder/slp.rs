//! SLP v1 OP_RETURN encoding
//!
//! `OP_RETURN <"SLP\0"> <token type> <tx type> <fields...>`, every field a
//! data push and every quantity an 8-byte big-endian integer.
//! Protocol reference: https://github.com/simpleledger/slp-specifications/blob/master/slp-token-type-1.md

use super::push::{push_bytes, OP_RETURN};
use crate::errors::{TokenError, TokenResult};
use crate::types::constants::{
    MAX_DECIMALS, MAX_SLP_ATOMS, MINT_BATON_OUT_IDX, SLP_MAX_SEND_OUTPUTS,
};
use crate::types::{Atoms, GenesisInfo, TokenId, TokenProtocol, TokenType};
use bitcoin::ScriptBuf;
use byteorder::{BigEndian, ByteOrder};

pub const SLP_LOKAD_ID: &[u8] = b"SLP\0";
pub const GENESIS: &[u8] = b"GENESIS";
pub const MINT: &[u8] = b"MINT";
pub const SEND: &[u8] = b"SEND";

fn check_slp_type(token_type: TokenType, operation: &'static str) -> TokenResult<()> {
    if token_type.protocol() != TokenProtocol::Slp {
        return Err(TokenError::UnsupportedTokenType {
            token_type: token_type.to_string(),
            operation,
        });
    }
    Ok(())
}

fn prefix(token_type: TokenType, tx_type: &[u8]) -> Vec<u8> {
    let mut script = vec![OP_RETURN];
    push_bytes(&mut script, SLP_LOKAD_ID);
    push_bytes(&mut script, &[token_type.number()]);
    push_bytes(&mut script, tx_type);
    script
}

fn push_atoms(script: &mut Vec<u8>, atoms: Atoms) -> TokenResult<()> {
    if atoms > MAX_SLP_ATOMS {
        return Err(TokenError::EncodingOverflow {
            atoms,
            max: MAX_SLP_ATOMS,
        });
    }
    let mut bytes = [0u8; 8];
    BigEndian::write_u64(&mut bytes, atoms as u64);
    push_bytes(script, &bytes);
    Ok(())
}

fn genesis_hash(info: &GenesisInfo) -> TokenResult<Vec<u8>> {
    let hash = match info.hash.as_deref() {
        None | Some("") => return Ok(Vec::new()),
        Some(hash) => hash,
    };
    let bytes = hex::decode(hash).map_err(|e| TokenError::InvalidGenesisField {
        field: "hash",
        reason: e.to_string(),
    })?;
    if bytes.len() != 32 {
        return Err(TokenError::InvalidGenesisField {
            field: "hash",
            reason: format!("must be 0 or 32 bytes, got {}", bytes.len()),
        });
    }
    Ok(bytes)
}

/// GENESIS script. Fixed supply when `mint_baton_out_idx` is `None`.
pub fn genesis(
    token_type: TokenType,
    info: &GenesisInfo,
    initial_atoms: Atoms,
    mint_baton_out_idx: Option<u8>,
) -> TokenResult<ScriptBuf> {
    check_slp_type(token_type, "SLP GENESIS")?;
    if let Some(idx) = mint_baton_out_idx {
        if idx != MINT_BATON_OUT_IDX {
            return Err(TokenError::UnsupportedMintBatonPosition(idx));
        }
        if token_type == TokenType::SlpNft1Child {
            return Err(TokenError::UnsupportedTokenType {
                token_type: token_type.to_string(),
                operation: "GENESIS with mint baton",
            });
        }
    }
    if info.decimals > MAX_DECIMALS {
        return Err(TokenError::InvalidDecimals {
            decimals: info.decimals,
        });
    }
    let hash = genesis_hash(info)?;

    let mut script = prefix(token_type, GENESIS);
    push_bytes(&mut script, info.token_ticker.as_bytes());
    push_bytes(&mut script, info.token_name.as_bytes());
    push_bytes(&mut script, info.url.as_bytes());
    push_bytes(&mut script, &hash);
    push_bytes(&mut script, &[info.decimals]);
    match mint_baton_out_idx {
        Some(idx) => push_bytes(&mut script, &[idx]),
        None => push_bytes(&mut script, &[]),
    }
    push_atoms(&mut script, initial_atoms)?;
    Ok(ScriptBuf::from_bytes(script))
}

/// MINT script. The new baton always goes to output 2.
pub fn mint(token_id: &TokenId, token_type: TokenType, atoms: Atoms) -> TokenResult<ScriptBuf> {
    check_slp_type(token_type, "SLP MINT")?;
    if token_type == TokenType::SlpNft1Child {
        return Err(TokenError::UnsupportedTokenType {
            token_type: token_type.to_string(),
            operation: "MINT",
        });
    }
    let mut script = prefix(token_type, MINT);
    push_bytes(&mut script, &token_id.to_bytes());
    push_bytes(&mut script, &[MINT_BATON_OUT_IDX]);
    push_atoms(&mut script, atoms)?;
    Ok(ScriptBuf::from_bytes(script))
}

/// SEND script, amounts map 1:1 onto outputs 1..=n
pub fn send(token_id: &TokenId, token_type: TokenType, amounts: &[Atoms]) -> TokenResult<ScriptBuf> {
    check_slp_type(token_type, "SLP SEND")?;
    if amounts.is_empty() {
        return Err(TokenError::InvalidAmounts(
            "SEND requires at least one amount".to_string(),
        ));
    }
    if amounts.len() > SLP_MAX_SEND_OUTPUTS {
        return Err(TokenError::InvalidAmounts(format!(
            "Cannot use more than {} amounts, but got {}",
            SLP_MAX_SEND_OUTPUTS,
            amounts.len()
        )));
    }
    let mut script = prefix(token_type, SEND);
    push_bytes(&mut script, &token_id.to_bytes());
    for &atoms in amounts {
        push_atoms(&mut script, atoms)?;
    }
    Ok(ScriptBuf::from_bytes(script))
}

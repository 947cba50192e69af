//! Token OP_RETURN script construction
//!
//! `slp` and `alp` encode protocol messages; the functions here pick the
//! protocol from the token type and wrap ALP sections in an eMPP envelope.

pub mod alp;
pub mod push;
pub mod slp;

use crate::errors::{TokenError, TokenResult};
use crate::types::constants::MINT_BATON_OUT_IDX;
use crate::types::{Atoms, GenesisInfo, TokenId, TokenProtocol, TokenType};
use alp::MintData;
use bitcoin::ScriptBuf;
use push::empp_script;
use tracing::debug;

pub use push::{push_bytes, OP_RESERVED, OP_RETURN};

/// GENESIS OP_RETURN for any supported token type.
///
/// The initial quantity goes to output 1. A mint baton, if requested, must
/// be at output 2.
pub fn genesis_script(
    token_type: TokenType,
    info: &GenesisInfo,
    initial_atoms: Atoms,
    mint_baton_out_idx: Option<u8>,
) -> TokenResult<ScriptBuf> {
    debug!(
        "Encoding {} GENESIS: ticker={:?}, initial_atoms={}, mint_baton={:?}",
        token_type, info.token_ticker, initial_atoms, mint_baton_out_idx
    );
    match token_type.protocol() {
        TokenProtocol::Slp => slp::genesis(token_type, info, initial_atoms, mint_baton_out_idx),
        TokenProtocol::Alp => {
            if let Some(idx) = mint_baton_out_idx {
                if idx != MINT_BATON_OUT_IDX {
                    return Err(TokenError::UnsupportedMintBatonPosition(idx));
                }
            }
            let mint_data = MintData {
                atoms_array: vec![initial_atoms],
                num_batons: u8::from(mint_baton_out_idx.is_some()),
            };
            let section = alp::genesis(token_type, info, &mint_data)?;
            Ok(empp_script(&[section]))
        }
    }
}

/// MINT OP_RETURN. Minted atoms go to output 1 and the baton is passed on
/// to output 2.
pub fn mint_script(token_id: &TokenId, token_type: TokenType, atoms: Atoms) -> TokenResult<ScriptBuf> {
    debug!("Encoding {} MINT of {} atoms for {}", token_type, atoms, token_id);
    match token_type.protocol() {
        TokenProtocol::Slp => slp::mint(token_id, token_type, atoms),
        TokenProtocol::Alp => {
            let mint_data = MintData {
                atoms_array: vec![atoms],
                num_batons: 1,
            };
            Ok(empp_script(&[alp::mint(token_id, token_type, &mint_data)?]))
        }
    }
}

/// SEND OP_RETURN, `amounts[i]` goes to output `i + 1`
pub fn send_script(
    token_id: &TokenId,
    token_type: TokenType,
    amounts: &[Atoms],
) -> TokenResult<ScriptBuf> {
    debug!("Encoding {} SEND of {:?} for {}", token_type, amounts, token_id);
    match token_type.protocol() {
        TokenProtocol::Slp => slp::send(token_id, token_type, amounts),
        TokenProtocol::Alp => Ok(empp_script(&[alp::send(token_id, token_type, amounts)?])),
    }
}

/// Burn OP_RETURN.
///
/// SLP has no burn message that the network enforces, so a burn is a SEND
/// of the change (or of 0) that leaves the rest of the inputs unclaimed.
/// ALP declares the burn explicitly and adds a SEND only if there is change.
pub fn burn_script(
    token_id: &TokenId,
    token_type: TokenType,
    burn_atoms: Atoms,
    change: Option<Atoms>,
) -> TokenResult<ScriptBuf> {
    debug!(
        "Encoding {} burn of {} atoms for {}, change={:?}",
        token_type, burn_atoms, token_id, change
    );
    match token_type.protocol() {
        TokenProtocol::Slp => slp::send(token_id, token_type, &[change.unwrap_or(0)]),
        TokenProtocol::Alp => {
            let mut sections = vec![alp::burn(token_id, token_type, burn_atoms)?];
            if let Some(change) = change.filter(|change| *change > 0) {
                sections.push(alp::send(token_id, token_type, &[change])?);
            }
            Ok(empp_script(&sections))
        }
    }
}

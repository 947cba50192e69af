//! ALP section encoding
//!
//! An ALP section is carried as one push inside an eMPP OP_RETURN:
//! `"SLP2" <token type u8> <size-prefixed tx type> <fields...>`.
//! Atoms are 6-byte little-endian, token ids are written byte-reversed and
//! every list is prefixed by a count of at most 127.
//! Protocol reference: https://ecashbuilders.notion.site/ALP-a862a4130877448387373b9e6a93dd97

use crate::errors::{TokenError, TokenResult};
use crate::types::constants::{ALP_MAX_SIZE, MAX_ALP_ATOMS, MAX_DECIMALS};
use crate::types::{Atoms, GenesisInfo, TokenId, TokenType};
use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;

pub const ALP_LOKAD_ID: &[u8] = b"SLP2";
pub const GENESIS: &[u8] = b"GENESIS";
pub const MINT: &[u8] = b"MINT";
pub const SEND: &[u8] = b"SEND";
pub const BURN: &[u8] = b"BURN";

/// Newly minted amounts plus the number of mint batons to create.
///
/// Minted amounts go to outputs 1..=n, batons to the outputs right after.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintData {
    #[serde(serialize_with = "crate::types::atoms_serde::serialize_vec")]
    pub atoms_array: Vec<Atoms>,
    pub num_batons: u8,
}

fn check_alp_type(token_type: TokenType, operation: &'static str) -> TokenResult<()> {
    if token_type != TokenType::AlpStandard {
        return Err(TokenError::UnsupportedTokenType {
            token_type: token_type.to_string(),
            operation,
        });
    }
    Ok(())
}

/// Bitcoin compact size, as used by ALP for variable-length fields
pub fn write_compact_size(section: &mut Vec<u8>, size: u64) {
    match size {
        0..=0xfc => section.push(size as u8),
        0xfd..=0xffff => {
            section.push(0xfd);
            let mut buf = [0u8; 2];
            LittleEndian::write_u16(&mut buf, size as u16);
            section.extend_from_slice(&buf);
        }
        0x1_0000..=0xffff_ffff => {
            section.push(0xfe);
            let mut buf = [0u8; 4];
            LittleEndian::write_u32(&mut buf, size as u32);
            section.extend_from_slice(&buf);
        }
        _ => {
            section.push(0xff);
            let mut buf = [0u8; 8];
            LittleEndian::write_u64(&mut buf, size);
            section.extend_from_slice(&buf);
        }
    }
}

fn write_var_bytes(section: &mut Vec<u8>, bytes: &[u8]) {
    write_compact_size(section, bytes.len() as u64);
    section.extend_from_slice(bytes);
}

fn write_atoms(section: &mut Vec<u8>, atoms: Atoms) -> TokenResult<()> {
    if atoms > MAX_ALP_ATOMS {
        return Err(TokenError::EncodingOverflow {
            atoms,
            max: MAX_ALP_ATOMS,
        });
    }
    let mut buf = [0u8; 6];
    LittleEndian::write_u48(&mut buf, atoms as u64);
    section.extend_from_slice(&buf);
    Ok(())
}

fn write_atoms_array(section: &mut Vec<u8>, atoms_array: &[Atoms]) -> TokenResult<()> {
    if atoms_array.len() > ALP_MAX_SIZE {
        return Err(TokenError::InvalidAmounts(format!(
            "Size must be between 0 and {}, but got {}",
            ALP_MAX_SIZE,
            atoms_array.len()
        )));
    }
    section.push(atoms_array.len() as u8);
    for &atoms in atoms_array {
        write_atoms(section, atoms)?;
    }
    Ok(())
}

fn write_mint_data(section: &mut Vec<u8>, mint_data: &MintData) -> TokenResult<()> {
    if mint_data.num_batons as usize > ALP_MAX_SIZE {
        return Err(TokenError::InvalidAmounts(format!(
            "numBatons must be between 0 and {}, but got {}",
            ALP_MAX_SIZE, mint_data.num_batons
        )));
    }
    write_atoms_array(section, &mint_data.atoms_array)?;
    section.push(mint_data.num_batons);
    Ok(())
}

fn hex_field(value: Option<&str>, field: &'static str) -> TokenResult<Vec<u8>> {
    match value {
        None => Ok(Vec::new()),
        Some(value) => hex::decode(value).map_err(|e| TokenError::InvalidGenesisField {
            field,
            reason: e.to_string(),
        }),
    }
}

fn prefix(token_type: TokenType, tx_type: &[u8]) -> Vec<u8> {
    let mut section = ALP_LOKAD_ID.to_vec();
    section.push(token_type.number());
    write_var_bytes(&mut section, tx_type);
    section
}

/// GENESIS section
pub fn genesis(
    token_type: TokenType,
    info: &GenesisInfo,
    mint_data: &MintData,
) -> TokenResult<Vec<u8>> {
    check_alp_type(token_type, "ALP GENESIS")?;
    if info.decimals > MAX_DECIMALS {
        return Err(TokenError::InvalidDecimals {
            decimals: info.decimals,
        });
    }
    let data = hex_field(info.data.as_deref(), "data")?;
    let auth_pubkey = hex_field(info.auth_pubkey.as_deref(), "authPubkey")?;

    let mut section = prefix(token_type, GENESIS);
    write_var_bytes(&mut section, info.token_ticker.as_bytes());
    write_var_bytes(&mut section, info.token_name.as_bytes());
    write_var_bytes(&mut section, info.url.as_bytes());
    write_var_bytes(&mut section, &data);
    write_var_bytes(&mut section, &auth_pubkey);
    section.push(info.decimals);
    write_mint_data(&mut section, mint_data)?;
    Ok(section)
}

/// MINT section
pub fn mint(
    token_id: &TokenId,
    token_type: TokenType,
    mint_data: &MintData,
) -> TokenResult<Vec<u8>> {
    check_alp_type(token_type, "ALP MINT")?;
    let mut section = prefix(token_type, MINT);
    section.extend_from_slice(&token_id.to_reversed_bytes());
    write_mint_data(&mut section, mint_data)?;
    Ok(section)
}

/// SEND section
pub fn send(token_id: &TokenId, token_type: TokenType, amounts: &[Atoms]) -> TokenResult<Vec<u8>> {
    check_alp_type(token_type, "ALP SEND")?;
    let mut section = prefix(token_type, SEND);
    section.extend_from_slice(&token_id.to_reversed_bytes());
    write_atoms_array(&mut section, amounts)?;
    Ok(section)
}

/// BURN section, an intentional burn of `burn_atoms` from the inputs
pub fn burn(token_id: &TokenId, token_type: TokenType, burn_atoms: Atoms) -> TokenResult<Vec<u8>> {
    check_alp_type(token_type, "ALP BURN")?;
    let mut section = prefix(token_type, BURN);
    section.extend_from_slice(&token_id.to_reversed_bytes());
    write_atoms(&mut section, burn_atoms)?;
    Ok(section)
}

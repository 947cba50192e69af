//! Target output builders
//!
//! Each builder returns outputs in wire order: the token OP_RETURN at index 0
//! with 0 sats, then dust outputs. Outputs without a script are
//! `TargetOutput::ChangeSlot`s that the signer pays to the wallet's change
//! script.

use crate::encoder::{burn_script, genesis_script, mint_script, send_script};
use crate::errors::{TokenError, TokenResult};
use crate::types::constants::{NFT1_CHILD_GENESIS_ATOMS, SLP_MAX_SEND_OUTPUTS};
use crate::types::{
    Atoms, GenesisInfo, TargetOutput, TokenId, TokenInputSelection, TokenType, TokenUtxo,
};
use crate::utils::amounts::undecimalize_token_amount;
use bitcoin::ScriptBuf;
use tracing::debug;

/// Outputs for a fungible or NFT1 group GENESIS.
///
/// The initial quantity is minted to the wallet at index 1, and a mint baton
/// is created at index 2 if `mint_baton_out_idx` is `Some(2)`. Any other
/// index fails with `UnsupportedMintBatonPosition`.
pub fn genesis_target_outputs(
    token_type: TokenType,
    info: &GenesisInfo,
    initial_atoms: Atoms,
    mint_baton_out_idx: Option<u8>,
) -> TokenResult<Vec<TargetOutput>> {
    if token_type == TokenType::SlpNft1Child {
        return Err(TokenError::UnsupportedTokenType {
            token_type: token_type.to_string(),
            operation: "genesis (use the NFT1 child genesis builder)",
        });
    }
    let script = genesis_script(token_type, info, initial_atoms, mint_baton_out_idx)?;

    let mut outputs = vec![TargetOutput::op_return(script), TargetOutput::dust_change()];
    if mint_baton_out_idx.is_some() {
        outputs.push(TargetOutput::dust_change());
    }
    Ok(outputs)
}

/// Outputs for an NFT1 group (collection) GENESIS
pub fn nft_parent_genesis_target_outputs(
    info: &GenesisInfo,
    initial_atoms: Atoms,
    mint_baton_out_idx: Option<u8>,
) -> TokenResult<Vec<TargetOutput>> {
    genesis_target_outputs(TokenType::SlpNft1Group, info, initial_atoms, mint_baton_out_idx)
}

/// Outputs for a SEND to a single destination.
///
/// Change, if the selection has any, goes back to the wallet at index 2.
pub fn send_target_outputs(
    selection: &TokenInputSelection,
    destination: ScriptBuf,
) -> TokenResult<Vec<TargetOutput>> {
    let script = send_script(
        &selection.token_id,
        selection.token_type,
        &selection.send_amounts,
    )?;
    let mut outputs = vec![
        TargetOutput::op_return(script),
        TargetOutput::dust_to(destination),
    ];
    if selection.change_atoms().is_some() {
        outputs.push(TargetOutput::dust_change());
    }
    Ok(outputs)
}

/// Outputs for a burn of the selection's requested amount.
///
/// Always ends with a dust change output, even when nothing is left over:
/// a transaction needs at least one non-OP_RETURN output.
pub fn burn_target_outputs(selection: &TokenInputSelection) -> TokenResult<Vec<TargetOutput>> {
    let script = burn_script(
        &selection.token_id,
        selection.token_type,
        selection.requested_atoms(),
        selection.change_atoms(),
    )?;
    Ok(vec![
        TargetOutput::op_return(script),
        TargetOutput::dust_change(),
    ])
}

/// Outputs for a MINT of a decimalized `mint_qty`.
///
/// Always `[OP_RETURN, minted qty, mint baton]`; the baton stays with the
/// wallet at index 2.
pub fn mint_target_outputs(
    token_id: &TokenId,
    decimals: u8,
    mint_qty: &str,
    token_type: TokenType,
) -> TokenResult<Vec<TargetOutput>> {
    if mint_qty.is_empty() {
        return Err(TokenError::EmptyAmount);
    }
    let atoms = undecimalize_token_amount(mint_qty, decimals)?;
    mint_atoms_target_outputs(token_id, token_type, atoms)
}

/// Outputs for a MINT of an NFT1 group. Groups have 0 decimals, so the
/// quantity is given in atoms.
pub fn nft_parent_mint_target_outputs(
    token_id: &TokenId,
    mint_atoms: Atoms,
) -> TokenResult<Vec<TargetOutput>> {
    mint_atoms_target_outputs(token_id, TokenType::SlpNft1Group, mint_atoms)
}

fn mint_atoms_target_outputs(
    token_id: &TokenId,
    token_type: TokenType,
    atoms: Atoms,
) -> TokenResult<Vec<TargetOutput>> {
    let script = mint_script(token_id, token_type, atoms)?;
    Ok(vec![
        TargetOutput::op_return(script),
        TargetOutput::dust_change(),
        TargetOutput::dust_change(),
    ])
}

/// Outputs for an NFT1 group fan-out: as many 1-unit utxos as one SLP SEND
/// can create.
///
/// Inputs are consumed in order until they hold at least 19 units. With 19 or
/// more units the tx creates 18 single units plus one change output (or 19
/// single units when the total is exactly 19); with fewer it creates one
/// output per unit.
///
/// Every input must be a non-baton NFT1 group utxo of the same token, since
/// the output count is derived from the inputs' atoms.
pub fn nft_parent_fan_tx_target_outputs(
    fan_inputs: &[TokenUtxo],
) -> TokenResult<Vec<TargetOutput>> {
    let first = fan_inputs
        .first()
        .and_then(|utxo| utxo.token.as_ref())
        .ok_or(TokenError::NoEligibleFanInputs)?;
    let token_id = first.token_id.clone();

    for utxo in fan_inputs {
        match &utxo.token {
            Some(token)
                if token.token_id == token_id
                    && token.token_type == TokenType::SlpNft1Group
                    && !token.is_mint_baton => {}
            _ => {
                return Err(TokenError::InvalidFanInput(format!(
                    "{}:{} is not a spendable NFT1 group utxo of {}",
                    utxo.outpoint.txid, utxo.outpoint.out_idx, token_id
                )))
            }
        }
    }

    let max_outputs = SLP_MAX_SEND_OUTPUTS as Atoms;
    let mut total: Atoms = 0;
    let mut reached_max = false;
    for utxo in fan_inputs {
        total = total.saturating_add(utxo.token_atoms());
        if total >= max_outputs {
            reached_max = true;
            break;
        }
    }

    // fan_outputs <= 19 in both branches
    let fan_outputs = if reached_max {
        SLP_MAX_SEND_OUTPUTS
    } else {
        total as usize
    };
    if fan_outputs == 0 {
        return Err(TokenError::NoEligibleFanInputs);
    }
    let change = if reached_max {
        total - (max_outputs - 1)
    } else {
        0
    };
    // With exactly 19 units the "change" is a single unit, same as the rest
    let send_amounts: Vec<Atoms> = if reached_max && change > 1 {
        let mut amounts = vec![1; SLP_MAX_SEND_OUTPUTS - 1];
        amounts.push(change);
        amounts
    } else {
        vec![1; fan_outputs]
    };

    debug!(
        "NFT1 fan-out of {}: total={} outputs={} change={}",
        token_id, total, fan_outputs, change
    );

    let script = send_script(&token_id, TokenType::SlpNft1Group, &send_amounts)?;
    let mut outputs = Vec::with_capacity(fan_outputs + 1);
    outputs.push(TargetOutput::op_return(script));
    outputs.extend((0..fan_outputs).map(|_| TargetOutput::dust_change()));
    Ok(outputs)
}

/// Outputs for an NFT1 child GENESIS. Always exactly one unit, never a baton.
pub fn nft_child_genesis_target_outputs(info: &GenesisInfo) -> TokenResult<Vec<TargetOutput>> {
    let script = genesis_script(TokenType::SlpNft1Child, info, NFT1_CHILD_GENESIS_ATOMS, None)?;
    Ok(vec![
        TargetOutput::op_return(script),
        TargetOutput::dust_change(),
    ])
}

/// Outputs sending the NFT `token_id` to `destination`. NFTs are never split,
/// so there is no change.
pub fn nft_child_send_target_outputs(
    token_id: &TokenId,
    destination: ScriptBuf,
) -> TokenResult<Vec<TargetOutput>> {
    let script = send_script(token_id, TokenType::SlpNft1Child, &[NFT1_CHILD_GENESIS_ATOMS])?;
    Ok(vec![
        TargetOutput::op_return(script),
        TargetOutput::dust_to(destination),
    ])
}

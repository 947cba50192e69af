//! Token UTXO classification and input selection
//!
//! Every function here works on a caller-supplied wallet snapshot and
//! preserves its order; nothing is sorted by size.

use crate::errors::{TokenError, TokenResult};
use crate::types::constants::{MAX_DECIMALS, NFT1_CHILD_GENESIS_ATOMS};
use crate::types::{Atoms, TokenId, TokenInputSelection, TokenUtxo};
use crate::utils::amounts::{decimalize_token_amount, undecimalize_token_amount};
use tracing::{debug, warn};

/// Utxos of `token_id` that can be spent in a SEND. Mint batons excluded.
pub fn get_all_send_utxos(utxos: &[TokenUtxo], token_id: &TokenId) -> Vec<TokenUtxo> {
    utxos
        .iter()
        .filter(|utxo| utxo.is_token(token_id) && !utxo.is_mint_baton())
        .cloned()
        .collect()
}

/// Mint batons held for `token_id`
pub fn get_mint_batons(utxos: &[TokenUtxo], token_id: &TokenId) -> Vec<TokenUtxo> {
    utxos
        .iter()
        .filter(|utxo| utxo.is_token(token_id) && utxo.is_mint_baton())
        .cloned()
        .collect()
}

/// Select inputs to send (or burn) `send_qty` of `token_id`.
///
/// Utxos are accumulated first-fit in snapshot order and collection stops as
/// soon as the requested amount is covered. The returned `send_amounts` is
/// `[requested]` or `[requested, change]`, never with a zero change.
///
/// # Errors
/// `EmptyAmount`, `InvalidDecimals`, `NoTokenUtxos`, `InvalidAmount` and
/// `InsufficientBalance`, checked in that order.
pub fn get_send_token_inputs(
    utxos: &[TokenUtxo],
    token_id: &TokenId,
    send_qty: &str,
    decimals: u8,
) -> TokenResult<TokenInputSelection> {
    if send_qty.is_empty() {
        warn!("Rejected send of {}: empty amount", token_id);
        return Err(TokenError::EmptyAmount);
    }
    if decimals > MAX_DECIMALS {
        warn!("Rejected send of {}: decimals {}", token_id, decimals);
        return Err(TokenError::InvalidDecimals { decimals });
    }

    let send_utxos = get_all_send_utxos(utxos, token_id);
    if send_utxos.is_empty() {
        warn!("Rejected send of {}: no token utxos", token_id);
        return Err(TokenError::NoTokenUtxos {
            token_id: token_id.to_string(),
        });
    }

    let requested = undecimalize_token_amount(send_qty, decimals)?;

    let mut total: Atoms = 0;
    let mut token_inputs = Vec::new();
    for utxo in send_utxos {
        total = total.saturating_add(utxo.token_atoms());
        token_inputs.push(utxo);
        if total >= requested {
            break;
        }
    }

    if total < requested {
        let available = decimalize_token_amount(total, decimals)?;
        let requested = decimalize_token_amount(requested, decimals)?;
        warn!(
            "Rejected send of {}: balance {} below requested {}",
            token_id, available, requested
        );
        return Err(TokenError::InsufficientBalance {
            available,
            requested,
        });
    }

    let mut send_amounts = vec![requested];
    let change = total - requested;
    if change > 0 {
        send_amounts.push(change);
    }

    // Non-empty: the loop above ran at least once
    let token_type = token_inputs
        .first()
        .and_then(|utxo| utxo.token.as_ref())
        .map(|token| token.token_type)
        .ok_or_else(|| TokenError::NoTokenUtxos {
            token_id: token_id.to_string(),
        })?;

    debug!(
        "Selected {} input(s) for {}: total={} requested={} change={}",
        token_inputs.len(),
        token_id,
        total,
        requested,
        change
    );

    Ok(TokenInputSelection {
        token_id: token_id.clone(),
        token_type,
        token_inputs,
        send_amounts,
    })
}

/// NFT1 group utxos that can be fanned out into 1-unit utxos. Utxos that
/// already hold exactly one unit are left alone.
pub fn get_nft_parent_fan_inputs(token_id: &TokenId, utxos: &[TokenUtxo]) -> Vec<TokenUtxo> {
    utxos
        .iter()
        .filter(|utxo| {
            utxo.is_token(token_id)
                && !utxo.is_mint_baton()
                && utxo.token_atoms() != NFT1_CHILD_GENESIS_ATOMS
        })
        .cloned()
        .collect()
}

/// A single 1-unit NFT1 group utxo to burn in an NFT1 child genesis
pub fn get_nft_child_genesis_input(token_id: &TokenId, utxos: &[TokenUtxo]) -> Option<TokenUtxo> {
    utxos
        .iter()
        .find(|utxo| {
            utxo.is_token(token_id)
                && !utxo.is_mint_baton()
                && utxo.token_atoms() == NFT1_CHILD_GENESIS_ATOMS
        })
        .cloned()
}

/// The utxo holding the NFT `token_id`, if this wallet has it.
///
/// Only one such utxo is expected to exist, so the first match is returned
/// without checking for others.
pub fn get_nft(token_id: &TokenId, utxos: &[TokenUtxo]) -> Option<TokenUtxo> {
    utxos.iter().find(|utxo| utxo.is_token(token_id)).cloned()
}

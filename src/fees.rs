//! Fee sizing for the two-transaction agora listing flow
//!
//! Listing an SLP token on agora takes an "ad setup" tx followed by the
//! offer tx. The ad setup tx funds an output that must exactly cover the
//! offer tx's fee, so the offer tx is built once with placeholder signatures
//! of the real size and measured.

use crate::encoder::push_bytes;
use crate::errors::{TokenError, TokenResult};
use bitcoin::consensus::encode::serialize;
use bitcoin::hashes::Hash;
use bitcoin::transaction::Version;
use bitcoin::{
    absolute::LockTime, OutPoint, Script, ScriptBuf, Sequence, Transaction, TxIn, TxOut, Txid,
    Witness,
};
use tracing::{debug, warn};

/// Schnorr signature (64 bytes) plus the sighash flag byte
pub const SCHNORR_SIG_WITH_FLAG_LEN: usize = 65;

/// Compressed secp256k1 public key
pub const COMPRESSED_PUBKEY_LEN: usize = 33;

/// Placeholder prevout txid for the measured tx
const DUMMY_TXID_BYTES: [u8; 32] = [0x11; 32];

/// Produces a scriptSig that is byte-for-byte the size of the real one
pub trait Signatory {
    fn dummy_script_sig(&self, redeem_script: &Script) -> ScriptBuf;
}

/// Spend of a P2PKH output: `<sig> <pubkey>`
#[derive(Debug, Clone, Copy, Default)]
pub struct P2pkhSignatory;

impl Signatory for P2pkhSignatory {
    fn dummy_script_sig(&self, _redeem_script: &Script) -> ScriptBuf {
        let mut script = Vec::with_capacity(2 + SCHNORR_SIG_WITH_FLAG_LEN + COMPRESSED_PUBKEY_LEN);
        push_bytes(&mut script, &[0u8; SCHNORR_SIG_WITH_FLAG_LEN]);
        push_bytes(&mut script, &[0u8; COMPRESSED_PUBKEY_LEN]);
        ScriptBuf::from_bytes(script)
    }
}

/// Spend of the P2SH agora ad output: `<sig> <redeem script>`
#[derive(Debug, Clone, Copy, Default)]
pub struct AdSetupSignatory;

impl Signatory for AdSetupSignatory {
    fn dummy_script_sig(&self, redeem_script: &Script) -> ScriptBuf {
        let mut script = Vec::new();
        push_bytes(&mut script, &[0u8; SCHNORR_SIG_WITH_FLAG_LEN]);
        push_bytes(&mut script, redeem_script.as_bytes());
        ScriptBuf::from_bytes(script)
    }
}

/// Serialized size of a one-input tx spending `redeem_script` via
/// `signatory` into `offer_outputs`
pub fn measure_offer_tx_size(
    redeem_script: &Script,
    signatory: &dyn Signatory,
    offer_outputs: &[TxOut],
) -> usize {
    let tx = Transaction {
        version: Version::TWO,
        lock_time: LockTime::ZERO,
        input: vec![TxIn {
            previous_output: OutPoint {
                txid: Txid::from_byte_array(DUMMY_TXID_BYTES),
                vout: 1,
            },
            script_sig: signatory.dummy_script_sig(redeem_script),
            sequence: Sequence::MAX,
            witness: Witness::default(),
        }],
        output: offer_outputs.to_vec(),
    };
    serialize(&tx).len()
}

/// Sats the ad setup output must carry, on top of dust, so the offer tx
/// pays exactly its own fee: `ceil(size * sats_per_kb / 1000)`
///
/// # Errors
/// `FeeOverflow` if the fee does not fit in a `u64`.
///
/// # Examples
/// ```
/// use bitcoin::{Amount, ScriptBuf, TxOut};
/// use etoken_builder::fees::{agora_ad_fuel_sats, P2pkhSignatory};
///
/// let p2pkh = ScriptBuf::from_bytes(vec![0x76, 0xa9, 0x14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
///     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x88, 0xac]);
/// let outputs = [TxOut { value: Amount::from_sat(546), script_pubkey: p2pkh }];
/// assert_eq!(agora_ad_fuel_sats(&ScriptBuf::new(), &P2pkhSignatory, &outputs, 1000).unwrap(), 185);
/// ```
pub fn agora_ad_fuel_sats(
    redeem_script: &Script,
    signatory: &dyn Signatory,
    offer_outputs: &[TxOut],
    sats_per_kb: u64,
) -> TokenResult<u64> {
    let size = measure_offer_tx_size(redeem_script, signatory, offer_outputs);
    let fuel = u64::try_from((size as u128 * u128::from(sats_per_kb)).div_ceil(1000))
        .map_err(|_| {
            warn!("Rejected ad fuel: {} bytes at {} sats/kB overflows", size, sats_per_kb);
            TokenError::FeeOverflow { size, sats_per_kb }
        })?;
    debug!(
        "Measured offer tx: {} bytes at {} sats/kB, fuel {} sats",
        size, sats_per_kb, fuel
    );
    Ok(fuel)
}

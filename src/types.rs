//! eCash Token Transaction Builder - Type System
//!
//! - `token`: Token identity and protocol tables (TokenId, TokenType, protocol limits)
//! - `utxo`: Wallet UTXO snapshot types and the selection result
//! - `genesis`: Genesis metadata shared by SLP and ALP
//! - `output`: Target outputs handed to the transaction builder

mod genesis;
mod output;
mod token;
mod utxo;

pub use genesis::GenesisInfo;
pub use output::{is_token_dust_change_output, TargetOutput};
pub use token::{Atoms, TokenId, TokenProtocol, TokenType};
pub use utxo::{Outpoint, Token, TokenInputSelection, TokenUtxo};
pub(crate) use utxo::atoms_serde;

/// Protocol constants - compiled in, never configuration
pub mod constants {
    use super::Atoms;

    /// Minimum value of any non-OP_RETURN output
    pub const DUST_SATS: u64 = 546;

    /// Largest number of decimals a token may declare
    pub const MAX_DECIMALS: u8 = 9;

    /// 0xffffffffffffffff, SLP atoms are 8-byte unsigned integers
    pub const MAX_SLP_ATOMS: Atoms = u64::MAX as Atoms;

    /// 0xffffffffffff, ALP atoms are 6-byte unsigned integers
    pub const MAX_ALP_ATOMS: Atoms = 0xffff_ffff_ffff;

    /// Decimal rendering of MAX_SLP_ATOMS
    pub const MAX_SLP_ATOMS_STR: &str = "18446744073709551615";

    /// Decimal rendering of MAX_ALP_ATOMS
    pub const MAX_ALP_ATOMS_STR: &str = "281474976710655";

    /// SLP1 SEND supports at most 19 amounts. A 19-output SEND needs 217 of
    /// the 223 OP_RETURN bytes; every extra output costs another 9.
    pub const SLP_MAX_SEND_OUTPUTS: usize = 19;

    /// ALP size prefixes are capped at 127
    pub const ALP_MAX_SIZE: usize = 127;

    /// Mint batons are always created at this output
    pub const MINT_BATON_OUT_IDX: u8 = 2;

    /// NFT1 parent units burned by a single NFT1 child genesis
    pub const NFT1_CHILD_GENESIS_ATOMS: Atoms = 1;
}

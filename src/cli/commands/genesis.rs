use super::print_json;
use crate::errors::{AppError, AppResult};
use crate::outputs::{genesis_target_outputs, nft_child_genesis_target_outputs};
use crate::types::constants::{MINT_BATON_OUT_IDX, NFT1_CHILD_GENESIS_ATOMS};
use crate::types::{GenesisInfo, TargetOutput, TokenType};
use crate::utils::amounts::undecimalize_token_amount;
use clap::Args;

/// Build outputs for a token genesis
#[derive(Args)]
pub struct GenesisCommand {
    /// slp-fungible, slp-nft1-group, slp-nft1-child or alp-standard
    #[arg(long, default_value = "slp-fungible")]
    pub token_type: TokenType,

    #[arg(long)]
    pub ticker: String,

    #[arg(long)]
    pub name: String,

    #[arg(long, default_value = "")]
    pub url: String,

    /// SLP document hash, 32 bytes hex
    #[arg(long)]
    pub hash: Option<String>,

    /// ALP data field, hex
    #[arg(long)]
    pub data: Option<String>,

    /// ALP authority public key, hex
    #[arg(long)]
    pub auth_pubkey: Option<String>,

    /// Token decimals (0-9)
    #[arg(long, default_value_t = 0)]
    pub decimals: u8,

    /// Decimalized initial quantity minted to the wallet
    #[arg(long)]
    pub initial_qty: String,

    /// Create a mint baton at output 2
    #[arg(long)]
    pub mint_baton: bool,
}

impl GenesisCommand {
    fn genesis_info(&self) -> GenesisInfo {
        GenesisInfo {
            token_ticker: self.ticker.clone(),
            token_name: self.name.clone(),
            url: self.url.clone(),
            hash: self.hash.clone(),
            data: self.data.clone(),
            auth_pubkey: self.auth_pubkey.clone(),
            decimals: self.decimals,
        }
    }

    pub fn build(&self) -> AppResult<Vec<TargetOutput>> {
        let info = self.genesis_info();
        let initial_atoms = undecimalize_token_amount(&self.initial_qty, self.decimals)?;

        if self.token_type == TokenType::SlpNft1Child {
            if self.mint_baton || initial_atoms != NFT1_CHILD_GENESIS_ATOMS {
                return Err(AppError::InvalidArgument(
                    "an NFT1 child genesis creates exactly 1 unit and no mint baton".to_string(),
                ));
            }
            return Ok(nft_child_genesis_target_outputs(&info)?);
        }

        let mint_baton_out_idx = self.mint_baton.then_some(MINT_BATON_OUT_IDX);
        Ok(genesis_target_outputs(
            self.token_type,
            &info,
            initial_atoms,
            mint_baton_out_idx,
        )?)
    }

    pub fn run(&self) -> AppResult<()> {
        print_json(&self.build()?)
    }
}

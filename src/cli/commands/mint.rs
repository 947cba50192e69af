use super::print_json;
use crate::errors::AppResult;
use crate::outputs::mint_target_outputs;
use crate::types::{TargetOutput, TokenId, TokenType};
use clap::Args;

/// Build outputs for a token mint
#[derive(Args)]
pub struct MintCommand {
    /// Token id (64 hex characters)
    #[arg(long)]
    pub token_id: TokenId,

    /// Decimalized quantity to mint
    #[arg(long)]
    pub amount: String,

    /// Token decimals (0-9)
    #[arg(long)]
    pub decimals: u8,

    /// slp-fungible, slp-nft1-group or alp-standard
    #[arg(long, default_value = "slp-fungible")]
    pub token_type: TokenType,
}

impl MintCommand {
    pub fn build(&self) -> AppResult<Vec<TargetOutput>> {
        Ok(mint_target_outputs(
            &self.token_id,
            self.decimals,
            &self.amount,
            self.token_type,
        )?)
    }

    pub fn run(&self) -> AppResult<()> {
        print_json(&self.build()?)
    }
}

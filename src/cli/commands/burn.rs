use super::send::TokenTxPlan;
use super::{load_utxo_snapshot, print_json, resolve_utxo_file};
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::outputs::burn_target_outputs;
use crate::selector::get_send_token_inputs;
use crate::types::TokenId;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Select inputs and build outputs for a token burn
#[derive(Args)]
pub struct BurnCommand {
    /// Token id (64 hex characters)
    #[arg(long)]
    pub token_id: TokenId,

    /// Decimalized quantity to burn
    #[arg(long)]
    pub amount: String,

    /// Token decimals (0-9)
    #[arg(long)]
    pub decimals: u8,

    /// JSON utxo snapshot (overrides wallet.utxo_file)
    #[arg(long)]
    pub utxos: Option<PathBuf>,
}

impl BurnCommand {
    pub fn build(&self, config: &AppConfig) -> AppResult<TokenTxPlan> {
        let utxo_file = resolve_utxo_file(self.utxos.as_ref(), config)?;
        let utxos = load_utxo_snapshot(&utxo_file)?;

        let selection = get_send_token_inputs(&utxos, &self.token_id, &self.amount, self.decimals)?;
        let target_outputs = burn_target_outputs(&selection)?;
        info!(
            "Burn of {} {} ({})",
            self.amount, self.token_id, selection.token_type
        );

        Ok(TokenTxPlan {
            selection,
            target_outputs,
        })
    }

    pub fn run(&self, config: &AppConfig) -> AppResult<()> {
        print_json(&self.build(config)?)
    }
}

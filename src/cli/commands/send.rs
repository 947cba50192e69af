use super::{load_utxo_snapshot, parse_script_hex, print_json, resolve_utxo_file};
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::outputs::send_target_outputs;
use crate::selector::get_send_token_inputs;
use crate::types::{TargetOutput, TokenId, TokenInputSelection};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Select inputs and build outputs for a token send
#[derive(Args)]
pub struct SendCommand {
    /// Token id (64 hex characters)
    #[arg(long)]
    pub token_id: TokenId,

    /// Decimalized quantity to send, e.g. "12.5"
    #[arg(long)]
    pub amount: String,

    /// Token decimals (0-9)
    #[arg(long)]
    pub decimals: u8,

    /// Recipient output script, hex
    #[arg(long)]
    pub destination: String,

    /// JSON utxo snapshot (overrides wallet.utxo_file)
    #[arg(long)]
    pub utxos: Option<PathBuf>,
}

/// Inputs to spend and the outputs to create
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTxPlan {
    pub selection: TokenInputSelection,
    pub target_outputs: Vec<TargetOutput>,
}

impl SendCommand {
    pub fn build(&self, config: &AppConfig) -> AppResult<TokenTxPlan> {
        let destination = parse_script_hex(&self.destination)?;
        let utxo_file = resolve_utxo_file(self.utxos.as_ref(), config)?;
        let utxos = load_utxo_snapshot(&utxo_file)?;

        let selection = get_send_token_inputs(&utxos, &self.token_id, &self.amount, self.decimals)?;
        let target_outputs = send_target_outputs(&selection, destination)?;
        info!(
            "Send of {} {}: {} input(s), {} output(s)",
            self.amount,
            self.token_id,
            selection.token_inputs.len(),
            target_outputs.len()
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

use super::{parse_script_hex, print_json};
use crate::errors::AppResult;
use crate::parser::{parse_token_script, ParsedTokenScript};
use clap::Args;
use tracing::info;

/// Decode an SLP or ALP OP_RETURN script
#[derive(Args)]
pub struct DecodeCommand {
    /// Output script, hex
    pub script_hex: String,
}

impl DecodeCommand {
    /// `None` when the script carries no token message
    pub fn build(&self) -> AppResult<Option<ParsedTokenScript>> {
        let script = parse_script_hex(&self.script_hex)?;
        let parsed = parse_token_script(&script)?;
        if parsed.is_none() {
            info!("Script carries no SLP or ALP message");
        }
        Ok(parsed)
    }

    pub fn run(&self) -> AppResult<()> {
        print_json(&self.build()?)
    }
}

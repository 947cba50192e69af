use super::print_json;
use crate::errors::AppResult;
use crate::types::TokenProtocol;
use crate::utils::amounts::get_max_decimalized_qty;
use clap::Args;
use serde::Serialize;

/// Largest quantity a single token amount can express
#[derive(Args)]
pub struct MaxQtyCommand {
    /// Token protocol (slp or alp)
    #[arg(long, default_value = "slp")]
    pub protocol: TokenProtocol,

    /// Token decimals (0-9)
    #[arg(long)]
    pub decimals: u8,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxQtyOutput {
    pub protocol: TokenProtocol,
    pub decimals: u8,
    pub max_qty: String,
}

impl MaxQtyCommand {
    pub fn build(&self) -> AppResult<MaxQtyOutput> {
        Ok(MaxQtyOutput {
            protocol: self.protocol,
            decimals: self.decimals,
            max_qty: get_max_decimalized_qty(self.protocol, self.decimals)?,
        })
    }

    pub fn run(&self) -> AppResult<()> {
        print_json(&self.build()?)
    }
}

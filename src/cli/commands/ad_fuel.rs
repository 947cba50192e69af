use super::{parse_script_hex, print_json};
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::fees::{agora_ad_fuel_sats, measure_offer_tx_size, AdSetupSignatory};
use bitcoin::{Amount, TxOut};
use clap::Args;
use serde::Serialize;

/// Size the fuel output for an agora listing
#[derive(Args)]
pub struct AdFuelCommand {
    /// Agora redeem script spent by the offer tx, hex
    #[arg(long)]
    pub redeem_script: String,

    /// Offer tx output as SATS:SCRIPT_HEX, in order
    #[arg(long = "offer-output", value_parser = parse_offer_output, required = true)]
    pub offer_outputs: Vec<TxOut>,

    /// Fee rate (overrides fees.sats_per_kb)
    #[arg(long)]
    pub sats_per_kb: Option<u64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdFuelOutput {
    pub offer_tx_size: usize,
    pub sats_per_kb: u64,
    pub fuel_sats: u64,
}

fn parse_offer_output(arg: &str) -> Result<TxOut, AppError> {
    let (sats, script_hex) = arg
        .split_once(':')
        .ok_or_else(|| AppError::InvalidArgument(format!("expected SATS:SCRIPT_HEX, got {}", arg)))?;
    let sats: u64 = sats
        .parse()
        .map_err(|e| AppError::InvalidArgument(format!("bad sats \"{}\": {}", sats, e)))?;
    Ok(TxOut {
        value: Amount::from_sat(sats),
        script_pubkey: parse_script_hex(script_hex)?,
    })
}

impl AdFuelCommand {
    pub fn build(&self, config: &AppConfig) -> AppResult<AdFuelOutput> {
        let redeem_script = parse_script_hex(&self.redeem_script)?;
        let sats_per_kb = self.sats_per_kb.unwrap_or(config.fees.sats_per_kb);

        let offer_tx_size =
            measure_offer_tx_size(&redeem_script, &AdSetupSignatory, &self.offer_outputs);
        let fuel_sats = agora_ad_fuel_sats(
            &redeem_script,
            &AdSetupSignatory,
            &self.offer_outputs,
            sats_per_kb,
        )?;

        Ok(AdFuelOutput {
            offer_tx_size,
            sats_per_kb,
            fuel_sats,
        })
    }

    pub fn run(&self, config: &AppConfig) -> AppResult<()> {
        print_json(&self.build(config)?)
    }
}

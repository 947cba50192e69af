pub mod ad_fuel;
pub mod burn;
pub mod decode;
pub mod genesis;
pub mod max_qty;
pub mod mint;
pub mod send;

use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::types::TokenUtxo;
use bitcoin::ScriptBuf;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Pretty-print a command result to stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Read a JSON array of wallet utxos
pub fn load_utxo_snapshot(path: &Path) -> AppResult<Vec<TokenUtxo>> {
    let contents = fs::read_to_string(path)?;
    let utxos: Vec<TokenUtxo> = serde_json::from_str(&contents)?;
    info!("Loaded {} utxo(s) from {}", utxos.len(), path.display());
    Ok(utxos)
}

/// `--utxos` if given, else `wallet.utxo_file` from config
pub fn resolve_utxo_file(cli_path: Option<&PathBuf>, config: &AppConfig) -> AppResult<PathBuf> {
    cli_path
        .or(config.wallet.utxo_file.as_ref())
        .cloned()
        .ok_or_else(|| {
            AppError::InvalidArgument(
                "no utxo snapshot: pass --utxos or set wallet.utxo_file".to_string(),
            )
        })
}

pub fn parse_script_hex(script_hex: &str) -> AppResult<ScriptBuf> {
    Ok(ScriptBuf::from_bytes(hex::decode(script_hex)?))
}

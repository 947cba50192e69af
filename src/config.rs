use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default fee rate, in sats per kB
pub const DEFAULT_SATS_PER_KB: u64 = 1000;

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Application configuration loaded from etoken.toml or environment variables
///
/// Protocol constants (dust, decimals, atom ceilings) are not configurable;
/// see `types::constants`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub wallet: WalletConfig,
    pub fees: FeesConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConfig {
    /// JSON utxo snapshot used when --utxos is not given
    #[serde(default)]
    pub utxo_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeesConfig {
    pub sats_per_kb: u64,
}

impl Default for FeesConfig {
    fn default() -> Self {
        Self {
            sats_per_kb: DEFAULT_SATS_PER_KB,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from ./etoken.toml (if present) and environment
    /// variables. Environment variables take precedence over the file.
    ///
    /// Variables are `ETOKEN_` followed by the section and key joined with
    /// `__`, e.g. `ETOKEN_FEES__SATS_PER_KB=2000`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Like `load`, but reads the given file instead, which must exist
    pub fn load_from(file: Option<&Path>) -> Result<Self, ConfigError> {
        let file_source = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name("etoken").required(false),
        };

        let config = Config::builder()
            .set_default("fees.sats_per_kb", DEFAULT_SATS_PER_KB)?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?
            .add_source(file_source)
            .add_source(
                Environment::with_prefix("ETOKEN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Config values for CLI argument defaults. Falls back to compiled
    /// defaults if the config cannot be loaded.
    pub fn get_defaults() -> Self {
        Self::load().unwrap_or_default()
    }
}

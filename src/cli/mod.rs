use crate::config::AppConfig;
use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// eCash token transaction builder
#[derive(Parser)]
#[command(name = "etoken-builder")]
#[command(about = "Build and inspect SLP / ALP token transaction outputs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Largest quantity a single token amount can express
    MaxQty(commands::max_qty::MaxQtyCommand),
    /// Select inputs and build outputs for a token send
    Send(commands::send::SendCommand),
    /// Select inputs and build outputs for a token burn
    Burn(commands::burn::BurnCommand),
    /// Build outputs for a token mint
    Mint(commands::mint::MintCommand),
    /// Build outputs for a token genesis
    Genesis(commands::genesis::GenesisCommand),
    /// Decode an SLP or ALP OP_RETURN script
    Decode(commands::decode::DecodeCommand),
    /// Size the fuel output for an agora listing
    AdFuel(commands::ad_fuel::AdFuelCommand),
}

pub fn run() -> AppResult<()> {
    let config = AppConfig::get_defaults();

    // RUST_LOG wins; otherwise logging.level from config
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::MaxQty(command) => command.run(),
        Commands::Send(command) => command.run(&config),
        Commands::Burn(command) => command.run(&config),
        Commands::Mint(command) => command.run(),
        Commands::Genesis(command) => command.run(),
        Commands::Decode(command) => command.run(),
        Commands::AdFuel(command) => command.run(&config),
    }
}

//! eCash token transaction builder
//!
//! Encodes SLP v1 and ALP token scripts, selects token utxos from a wallet
//! snapshot, and builds the target outputs a signer turns into a transaction.

pub mod cli;
pub mod config;
pub mod encoder;
pub mod errors;
pub mod fees;
pub mod outputs;
pub mod parser;
pub mod selector;
pub mod types;
pub mod utils;

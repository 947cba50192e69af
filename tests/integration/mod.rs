//! Integration Tests Module
//!
//! End-to-end flows from a wallet snapshot to target outputs, and the
//! command layer driven with real snapshot and config files.

#[path = "../common/mod.rs"]
mod common;

pub mod cli_commands;
pub mod token_flows;

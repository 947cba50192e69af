//! Unit Tests Module
//!
//! Property tests over the amount conversion and input selection helpers.

#[path = "../common/mod.rs"]
mod common;

pub mod amount_properties;
pub mod selection_properties;

//! Shared helpers
//!
//! - `amounts`: decimalized string <-> atoms conversion

pub mod amounts;

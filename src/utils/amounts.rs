//! Token amount conversion between decimalized strings and atoms
//!
//! All conversion is textual. Token quantities routinely exceed the range a
//! f64 represents exactly, so no floating point is involved anywhere.

use crate::errors::{TokenError, TokenResult};
use crate::types::constants::{MAX_ALP_ATOMS_STR, MAX_DECIMALS, MAX_SLP_ATOMS_STR};
use crate::types::{Atoms, TokenProtocol};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Digits with at most one decimal point, at least one digit overall
    static ref DECIMALIZED_REGEX: Regex = Regex::new(r"^([0-9]+\.?[0-9]*|\.[0-9]+)$").unwrap();
}

fn check_decimals(decimals: u8) -> TokenResult<()> {
    if decimals > MAX_DECIMALS {
        return Err(TokenError::InvalidAmount(format!(
            "decimals {} out of range, must be an integer 0-{}",
            decimals, MAX_DECIMALS
        )));
    }
    Ok(())
}

/// Insert a decimal point `decimals` places from the right of a digit string
///
/// # Examples
/// ```
/// use etoken_builder::utils::amounts::insert_decimal_point;
///
/// assert_eq!(insert_decimal_point("1550", 2), "15.50");
/// assert_eq!(insert_decimal_point("1", 9), "0.000000001");
/// assert_eq!(insert_decimal_point("1550", 0), "1550");
/// ```
pub fn insert_decimal_point(digits: &str, decimals: u8) -> String {
    let decimals = decimals as usize;
    if decimals == 0 {
        return digits.to_string();
    }
    // Pad so that we return "0.001" and not ".001"
    let padded = if digits.len() <= decimals {
        format!("{}{}", "0".repeat(decimals - digits.len() + 1), digits)
    } else {
        digits.to_string()
    };
    let (before, after) = padded.split_at(padded.len() - decimals);
    format!("{}.{}", before, after)
}

/// Convert a decimalized amount string into atoms
///
/// Fails with `InvalidAmount` if the string is not a non-negative decimal
/// number, if it is specified at greater precision than `decimals`, if it
/// does not fit in atoms, or if `decimals` is outside 0-9.
///
/// # Examples
/// ```
/// use etoken_builder::utils::amounts::undecimalize_token_amount;
///
/// assert_eq!(undecimalize_token_amount("15", 0).unwrap(), 15);
/// assert_eq!(undecimalize_token_amount("15.5", 2).unwrap(), 1550);
/// assert!(undecimalize_token_amount("15.555", 2).is_err());
/// ```
pub fn undecimalize_token_amount(decimalized_amount: &str, decimals: u8) -> TokenResult<Atoms> {
    check_decimals(decimals)?;
    if !DECIMALIZED_REGEX.is_match(decimalized_amount) {
        return Err(TokenError::InvalidAmount(format!(
            "\"{}\" must be a non-empty string containing only decimal numbers and optionally one decimal point \".\"",
            decimalized_amount
        )));
    }

    let (integer_part, fraction_part) = decimalized_amount
        .split_once('.')
        .unwrap_or((decimalized_amount, ""));

    if fraction_part.len() > decimals as usize {
        return Err(TokenError::InvalidAmount(format!(
            "{} specified at greater precision than supported token decimals ({})",
            decimalized_amount, decimals
        )));
    }

    let digits = format!(
        "{}{}{}",
        integer_part,
        fraction_part,
        "0".repeat(decimals as usize - fraction_part.len())
    );

    digits.parse::<Atoms>().map_err(|_| {
        TokenError::InvalidAmount(format!(
            "{} is too large to be represented in atoms",
            decimalized_amount
        ))
    })
}

/// Render atoms as a decimalized amount string. Exact, no digits are trimmed.
///
/// # Examples
/// ```
/// use etoken_builder::utils::amounts::decimalize_token_amount;
///
/// assert_eq!(decimalize_token_amount(1550, 2).unwrap(), "15.50");
/// assert_eq!(decimalize_token_amount(300_000_000, 7).unwrap(), "30.0000000");
/// ```
pub fn decimalize_token_amount(atoms: Atoms, decimals: u8) -> TokenResult<String> {
    check_decimals(decimals)?;
    Ok(insert_decimal_point(&atoms.to_string(), decimals))
}

/// Largest quantity a single SLP amount can express, at `decimals`
///
/// # Examples
/// ```
/// use etoken_builder::utils::amounts::get_max_decimalized_slp_qty;
///
/// assert_eq!(get_max_decimalized_slp_qty(0).unwrap(), "18446744073709551615");
/// assert_eq!(get_max_decimalized_slp_qty(9).unwrap(), "18446744073.709551615");
/// ```
pub fn get_max_decimalized_slp_qty(decimals: u8) -> TokenResult<String> {
    get_max_decimalized_qty(TokenProtocol::Slp, decimals)
}

/// Largest quantity a single amount of `protocol` can express, at `decimals`
pub fn get_max_decimalized_qty(protocol: TokenProtocol, decimals: u8) -> TokenResult<String> {
    check_decimals(decimals)?;
    let max_atoms = match protocol {
        TokenProtocol::Slp => MAX_SLP_ATOMS_STR,
        TokenProtocol::Alp => MAX_ALP_ATOMS_STR,
    };
    Ok(insert_decimal_point(max_atoms, decimals))
}

//! Exact conversion between human-readable decimal amounts and the integer
//! base units the ledger stores.
//!
//! BU, the native coin, has 8 decimals (1 BU = 10^8 MO); issued tokens pick
//! their own scale up to 18. No floating point is involved anywhere: both
//! directions are string manipulations plus one checked `i64` parse.
//!
//! Accepted decimal syntax, for a scale of `d`:
//!
//! ```text
//! 0                      zero
//! 0.f                    1..=d fraction digits, last one non-zero
//! N                      no leading zero, at most 19 - d digits
//! N.f                    both of the above
//! ```

use crate::config::{BU_DECIMALS, MAX_UNIT_DECIMALS};
use crate::error::{Field, Result, SdkError};

/// Converts a decimal amount into base units at scale `decimals`.
///
/// ```
/// use bumo_sdk::units::unit_with_decimals;
///
/// assert_eq!(unit_with_decimals("1.5", 8).unwrap(), 150_000_000);
/// assert!(unit_with_decimals("01.5", 8).is_err());
/// ```
pub fn unit_with_decimals(amount: &str, decimals: u32) -> Result<i64> {
    check_decimals(decimals)?;
    let scale = decimals as usize;

    let (integer, fraction) = match amount.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (amount, None),
    };

    if !is_digits(integer) {
        return Err(malformed(amount, "integer part must be decimal digits"));
    }
    if integer.len() > 1 && integer.starts_with('0') {
        return Err(malformed(amount, "leading zeros are not allowed"));
    }
    if integer != "0" && integer.len() > MAX_UNIT_DECIMALS as usize + 1 - scale {
        return Err(malformed(amount, "integer part is too long for this scale"));
    }

    let mut digits = String::with_capacity(integer.len() + scale);
    digits.push_str(integer);
    if let Some(fraction) = fraction {
        if !is_digits(fraction) {
            return Err(malformed(amount, "fraction must be decimal digits"));
        }
        if fraction.len() > scale {
            return Err(malformed(
                amount,
                format!("more than {decimals} fraction digits"),
            ));
        }
        if fraction.ends_with('0') {
            return Err(malformed(amount, "trailing zeros in the fraction"));
        }
        digits.push_str(fraction);
        digits.extend(std::iter::repeat('0').take(scale - fraction.len()));
    } else {
        digits.extend(std::iter::repeat('0').take(scale));
    }

    digits
        .parse::<i64>()
        .map_err(|_| malformed(amount, "value does not fit in a signed 64-bit integer"))
}

/// Converts base units at scale `decimals` back into a decimal amount with
/// no trailing zeros.
///
/// ```
/// use bumo_sdk::units::unit_without_decimals;
///
/// assert_eq!(unit_without_decimals("150000000", 8).unwrap(), "1.5");
/// assert_eq!(unit_without_decimals("5", 2).unwrap(), "0.05");
/// ```
pub fn unit_without_decimals(units: &str, decimals: u32) -> Result<String> {
    check_decimals(decimals)?;
    if !is_digits(units) || (units.len() > 1 && units.starts_with('0')) {
        return Err(malformed(units, "base units must be a plain non-negative integer"));
    }
    units
        .parse::<i64>()
        .map_err(|_| malformed(units, "value does not fit in a signed 64-bit integer"))?;

    if decimals == 0 {
        return Ok(units.to_string());
    }

    let scale = decimals as usize;
    let mut rendered = if units.len() <= scale {
        let mut s = String::with_capacity(scale + 2);
        s.push_str("0.");
        s.extend(std::iter::repeat('0').take(scale - units.len()));
        s.push_str(units);
        s
    } else {
        let (integer, fraction) = units.split_at(units.len() - scale);
        format!("{integer}.{fraction}")
    };

    let trimmed = rendered.trim_end_matches('0').trim_end_matches('.').len();
    rendered.truncate(trimmed);
    Ok(rendered)
}

/// BU to MO (scale 8).
pub fn bu_to_mo(amount: &str) -> Result<i64> {
    unit_with_decimals(amount, BU_DECIMALS)
}

/// MO to BU (scale 8).
pub fn mo_to_bu(units: &str) -> Result<String> {
    unit_without_decimals(units, BU_DECIMALS)
}

fn check_decimals(decimals: u32) -> Result<()> {
    if decimals > MAX_UNIT_DECIMALS {
        return Err(SdkError::invalid_field(
            Field::Decimals,
            format!("{decimals} exceeds {MAX_UNIT_DECIMALS}"),
        ));
    }
    Ok(())
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn malformed(input: &str, reason: impl Into<String>) -> SdkError {
    SdkError::invalid_field(Field::Amount, format!("'{input}': {}", reason.into()))
}

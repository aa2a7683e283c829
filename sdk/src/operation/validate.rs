//! Field rules shared by every operation kind.
//!
//! Each helper checks exactly one rule and maps a violation to the matching
//! [`SdkError`]. Builders call them in their kind's fixed order, so the first
//! failing helper decides the error.

use crate::config::ASSET_CODE_MAX_LENGTH;
use crate::error::{AddressRole, Field, Result, SdkError};
use crate::identity::is_valid_address;

/// Optional source: empty or absent is fine, anything else must be valid.
pub(crate) fn source(address: Option<&str>) -> Result<()> {
    match address {
        Some(address) if !address.is_empty() => required_address(address, AddressRole::Source),
        _ => Ok(()),
    }
}

/// A mandatory address.
pub(crate) fn required_address(address: &str, role: AddressRole) -> Result<()> {
    if is_valid_address(address) {
        Ok(())
    } else {
        Err(SdkError::invalid_address(role))
    }
}

/// An address that may be left empty.
pub(crate) fn optional_address(address: &str, role: AddressRole) -> Result<()> {
    if address.is_empty() {
        Ok(())
    } else {
        required_address(address, role)
    }
}

/// The source must not also be `other`. Skipped when either side is empty.
pub(crate) fn distinct(source: Option<&str>, other: &str, role: AddressRole) -> Result<()> {
    match source {
        Some(source) if !source.is_empty() && !other.is_empty() && source == other => {
            Err(SdkError::self_reference(role))
        }
        _ => Ok(()),
    }
}

/// Byte length within `min..=max`.
pub(crate) fn length(field: Field, len: usize, min: usize, max: usize) -> Result<()> {
    if len < min {
        return Err(SdkError::invalid_field(
            field,
            format!("length {len} is below {min}"),
        ));
    }
    if len > max {
        return Err(SdkError::invalid_field(
            field,
            format!("length {len} exceeds {max}"),
        ));
    }
    Ok(())
}

/// Asset code, optionally allowed to be empty.
pub(crate) fn asset_code(code: &str, allow_empty: bool) -> Result<()> {
    let min = if allow_empty { 0 } else { 1 };
    length(Field::AssetCode, code.len(), min, ASSET_CODE_MAX_LENGTH)
}

pub(crate) fn positive(field: Field, value: i64) -> Result<()> {
    if value > 0 {
        Ok(())
    } else {
        Err(SdkError::invalid_field(
            field,
            format!("must be greater than 0, got {value}"),
        ))
    }
}

pub(crate) fn non_negative(field: Field, value: i64) -> Result<()> {
    if value >= 0 {
        Ok(())
    } else {
        Err(SdkError::invalid_field(
            field,
            format!("must not be negative, got {value}"),
        ))
    }
}

/// Value within `0..=max`.
pub(crate) fn bounded(field: Field, value: i64, max: i64) -> Result<()> {
    non_negative(field, value)?;
    if value > max {
        return Err(SdkError::invalid_field(
            field,
            format!("{value} exceeds {max}"),
        ));
    }
    Ok(())
}

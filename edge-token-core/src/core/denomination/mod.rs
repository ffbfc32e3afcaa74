//! Denomination conversion
//!
//! A denomination multiplier is always a power of ten written out in full:
//! `"1"` followed by as many zeros as the token has decimal places.

use crate::shared::constants::MAX_DECIMAL_PLACES;
use crate::shared::error::EditTokenError;

fn parse_decimal_places(decimal_places: &str) -> Result<u32, EditTokenError> {
    let trimmed = decimal_places.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(EditTokenError::invalid_denomination(decimal_places));
    }
    let places = trimmed
        .parse::<u32>()
        .map_err(|_| EditTokenError::invalid_denomination(decimal_places))?;
    if places > MAX_DECIMAL_PLACES {
        return Err(EditTokenError::invalid_denomination(decimal_places));
    }
    Ok(places)
}

/// Convert a decimal places string into a multiplier string.
///
/// `"6"` becomes `"1000000"`. Anything that is not a non-negative integer
/// fails with [`EditTokenError::InvalidDenomination`].
pub fn decimal_places_to_multiplier(decimal_places: &str) -> Result<String, EditTokenError> {
    let places = parse_decimal_places(decimal_places)?;
    let mut multiplier = String::with_capacity(places as usize + 1);
    multiplier.push('1');
    multiplier.extend(std::iter::repeat('0').take(places as usize));
    Ok(multiplier)
}

/// Convert a multiplier string back into decimal places.
///
/// Only exact powers of ten (`1`, `10`, `100`, ...) are accepted.
pub fn multiplier_to_decimal_places(multiplier: &str) -> Result<String, EditTokenError> {
    let trimmed = multiplier.trim();
    let zeros = match trimmed.strip_prefix('1') {
        Some(rest) if rest.chars().all(|c| c == '0') => rest.len(),
        _ => return Err(EditTokenError::invalid_denomination(multiplier)),
    };
    Ok(zeros.to_string())
}

/// Validate that a string is a usable decimal places value
pub fn validate_decimal_places(decimal_places: &str) -> Result<(), EditTokenError> {
    parse_decimal_places(decimal_places).map(|_| ())
}

/// Format a native integer amount for display using a denomination multiplier
pub fn format_native_amount(native: &str, multiplier: &str) -> Result<String, EditTokenError> {
    let decimals = multiplier_to_decimal_places(multiplier)?
        .parse::<usize>()
        .map_err(|_| EditTokenError::invalid_denomination(multiplier))?;

    let native = native.trim();
    if native.is_empty() || !native.chars().all(|c| c.is_ascii_digit()) {
        return Err(EditTokenError::invalid_denomination(format!("Invalid native amount: {}", native)));
    }

    // Strip redundant leading zeros but keep a single zero
    let digits = native.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    if decimals == 0 {
        return Ok(digits.to_string());
    }

    let formatted = if digits.len() <= decimals {
        format!("0.{}{}", "0".repeat(decimals - digits.len()), digits)
    } else {
        let (whole, fraction) = digits.split_at(digits.len() - decimals);
        format!("{}.{}", whole, fraction)
    };
    Ok(trim_fraction(&formatted))
}

/// Parse a display amount into native units using a denomination multiplier.
///
/// Extra fractional digits beyond the denomination's precision are truncated.
pub fn parse_display_amount(display: &str, multiplier: &str) -> Result<String, EditTokenError> {
    let decimals = multiplier_to_decimal_places(multiplier)?
        .parse::<usize>()
        .map_err(|_| EditTokenError::invalid_denomination(multiplier))?;

    let display = display.trim();
    let invalid = || EditTokenError::invalid_denomination(format!("Invalid display amount: {}", display));

    let (whole, fraction) = match display.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (display, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let mut native = String::with_capacity(whole.len() + decimals);
    native.push_str(whole);
    if fraction.len() > decimals {
        native.push_str(&fraction[..decimals]);
    } else {
        native.push_str(fraction);
        native.extend(std::iter::repeat('0').take(decimals - fraction.len()));
    }

    let native = native.trim_start_matches('0');
    Ok(if native.is_empty() { "0".to_string() } else { native.to_string() })
}

fn trim_fraction(formatted: &str) -> String {
    if !formatted.contains('.') {
        return formatted.to_string();
    }
    formatted.trim_end_matches('0').trim_end_matches('.').to_string()
}

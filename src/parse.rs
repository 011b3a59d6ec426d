//! Input boundary parsing
//!
//! Form fields hand this module raw user text; the conversion layer itself
//! stays strictly numeric. Empty input and the "N/A" sentinel parse to no
//! value rather than an error.

use thiserror::Error;

/// Parse error for user-entered measurement text
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMeasurementError {
    #[error("could not parse measurement from '{0}'")]
    InvalidNumber(String),

    #[error("measurement '{0}' is not a finite number")]
    NotFinite(String),
}

/// Unit labels that may trail a typed-in value, longest first so that
/// "L/100km" wins over "km" and "L"
const UNIT_SUFFIXES: &[&str] = &[
    "l/100km", "lb-ft", "mpg", "psi", "lbs", "bar", "gal", "°f", "°c", "km", "kg", "mi", "nm", "l",
];

/// Parse user-entered measurement text into an optional magnitude
///
/// Accepts a bare number, an optional trailing unit label, en-US thousands
/// grouping, and a comma decimal separator. Empty input and "N/A" (any case)
/// parse to `Ok(None)`.
///
/// Examples:
/// - "" -> Ok(None)
/// - "N/A" -> Ok(None)
/// - "12,000 mi" -> Ok(Some(12000.0))
/// - "9,4" -> Ok(Some(9.4))
pub fn parse_measurement(input: &str) -> Result<Option<f64>, ParseMeasurementError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("n/a") {
        return Ok(None);
    }

    let number_part = strip_unit_suffix(trimmed);
    let normalized = normalize_number(number_part);

    let value: f64 = normalized
        .parse()
        .map_err(|_| ParseMeasurementError::InvalidNumber(input.to_string()))?;
    if !value.is_finite() {
        return Err(ParseMeasurementError::NotFinite(input.to_string()));
    }

    Ok(Some(value))
}

/// Strip a trailing unit label, if present
fn strip_unit_suffix(text: &str) -> &str {
    let lower = text.to_lowercase();
    for suffix in UNIT_SUFFIXES {
        if lower.ends_with(suffix) {
            return text[..text.len() - suffix.len()].trim_end();
        }
    }
    text
}

/// Resolve commas: with a dot present they are thousands grouping; without
/// one, a single comma not followed by a three-digit group reads as a
/// decimal separator
fn normalize_number(text: &str) -> String {
    if text.contains('.') || text.match_indices(',').count() > 1 {
        return text.replace(',', "");
    }
    match text.split_once(',') {
        Some((head, tail)) => {
            if tail.len() == 3 && tail.chars().all(|c| c.is_ascii_digit()) {
                format!("{}{}", head, tail)
            } else {
                format!("{}.{}", head, tail)
            }
        }
        None => text.to_string(),
    }
}

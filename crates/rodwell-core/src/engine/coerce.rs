//! Field text coercion.
//!
//! The form never blocks on bad input: numbers that cannot be read become 0
//! and timestamps that cannot be read count as missing. The `parse_*`
//! functions keep the distinction for callers that need it.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Input parsing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("Invalid date (expected YYYY-MM-DD): {0:?}")]
    InvalidDate(String),

    #[error("Invalid time (expected HH:MM): {0:?}")]
    InvalidTime(String),

    #[error("Invalid date and time (expected YYYY-MM-DDTHH:MM): {0:?}")]
    InvalidDateTime(String),
}

pub type InputResult<T> = Result<T, InputError>;

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a count field. Empty text is `Ok(None)`.
pub fn parse_count(text: &str) -> InputResult<Option<f64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(InputError::InvalidNumber(text.to_string())),
    }
}

/// Read a count field the way the form does: empty or invalid is 0.
pub fn coerce_count(text: &str) -> f64 {
    match parse_count(text) {
        Ok(value) => value.unwrap_or(0.0),
        Err(e) => {
            log::debug!("{}; using 0", e);
            0.0
        }
    }
}

/// Parse a `YYYY-MM-DD` date. Empty text is `Ok(None)`.
pub fn parse_date(text: &str) -> InputResult<Option<NaiveDate>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| InputError::InvalidDate(text.to_string()))
}

/// Parse an `HH:MM` or `HH:MM:SS` time of day. Empty text is `Ok(None)`.
pub fn parse_time(text: &str) -> InputResult<Option<NaiveTime>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(trimmed, fmt).ok())
        .map(Some)
        .ok_or_else(|| InputError::InvalidTime(text.to_string()))
}

/// Parse a local date-and-time value. Empty text is `Ok(None)`.
pub fn parse_date_time(text: &str) -> InputResult<Option<NaiveDateTime>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(Some)
        .ok_or_else(|| InputError::InvalidDateTime(text.to_string()))
}

/// Collapse a parse result into "missing", logging the discarded error.
pub(crate) fn or_missing<T>(parsed: InputResult<Option<T>>) -> Option<T> {
    parsed.unwrap_or_else(|e| {
        log::debug!("{}; treating as missing", e);
        None
    })
}

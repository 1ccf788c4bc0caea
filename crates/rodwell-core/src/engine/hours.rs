//! Hours-of-life derivation.

use chrono::NaiveDateTime;

use super::coerce::{or_missing, parse_date, parse_date_time, parse_time};
use crate::models::BirthRecord;

/// Whole hours from birth to sample, truncated toward zero.
///
/// Returns 0 if any of the three values is empty or unreadable. A sample
/// taken before birth gives a negative count rather than an error.
pub fn compute_hours_of_life(birth_date: &str, birth_time: &str, sample_time: &str) -> i64 {
    let record = BirthRecord {
        birth_date: or_missing(parse_date(birth_date)),
        birth_time: or_missing(parse_time(birth_time)),
        sample_time: or_missing(parse_date_time(sample_time)),
        birth_weight_grams: None,
    };
    hours_of_life(&record)
}

/// Hours of life for an already parsed record.
pub fn hours_of_life(record: &BirthRecord) -> i64 {
    match (record.birth_timestamp(), record.sample_time) {
        (Some(birth), Some(sample)) => hours_between(birth, sample),
        _ => 0,
    }
}

fn hours_between(birth: NaiveDateTime, sample: NaiveDateTime) -> i64 {
    // TimeDelta::num_hours truncates toward zero
    (sample - birth).num_hours()
}

//! Birth timing record.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Parsed birth and sampling timestamps.
///
/// Any component that was empty or unparseable is `None`. Times are wall-clock
/// values without a zone.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BirthRecord {
    pub birth_date: Option<NaiveDate>,
    pub birth_time: Option<NaiveTime>,
    pub sample_time: Option<NaiveDateTime>,
    /// Birth weight in grams (display only)
    pub birth_weight_grams: Option<f64>,
}

impl BirthRecord {
    /// Birth instant, when both date and time are known.
    pub fn birth_timestamp(&self) -> Option<NaiveDateTime> {
        Some(self.birth_date?.and_time(self.birth_time?))
    }

    /// True when every timestamp needed for hours-of-life is present.
    pub fn is_complete(&self) -> bool {
        self.birth_timestamp().is_some() && self.sample_time.is_some()
    }
}

//! Derived calculator output.

use serde::{Deserialize, Serialize};

/// Which scoring conditions were met.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// WBC below 5000 or above 30000 (+1)
    pub wbc_out_of_range: bool,
    /// Bands above 1600 (+1)
    pub bands_elevated: bool,
    /// I/T ratio above 0.20 (+2)
    pub ratio_it_elevated: bool,
    /// I/M ratio above 0.30 (+1)
    pub ratio_im_elevated: bool,
    /// Platelets below 150000 (+1)
    pub platelets_low: bool,
    /// Toxic granulation present (+1)
    pub toxic_granulation: bool,
}

/// Everything the result panel displays.
///
/// A pure projection of the form at evaluation time; never stored.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct DerivedResult {
    /// Whole hours between birth and sample; 0 when a timestamp is missing
    pub hours_of_life: i64,
    /// Immature / total neutrophils
    pub ratio_it: f64,
    /// Immature / segmented neutrophils
    pub ratio_im: f64,
    /// Number of checked maternal risk factors (0-7)
    pub maternal_risk_count: u32,
    /// Rodwell score (0-7)
    pub rodwell_score: u32,
    pub criteria: ScoreBreakdown,
    /// Sample timestamp precedes the birth timestamp
    pub sample_before_birth: bool,
}

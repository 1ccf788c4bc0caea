//! Rodwell hematologic scoring.

use crate::models::{MaternalRiskFlags, ScoreBreakdown};

/// WBC below this is out of range.
pub const WBC_LOW_LIMIT: f64 = 5_000.0;
/// WBC above this is out of range.
pub const WBC_HIGH_LIMIT: f64 = 30_000.0;
/// Band count above this scores.
pub const BANDS_LIMIT: f64 = 1_600.0;
/// I/T ratio above this scores.
pub const RATIO_IT_LIMIT: f64 = 0.20;
/// I/M ratio above this scores.
pub const RATIO_IM_LIMIT: f64 = 0.30;
/// Platelets below this score.
pub const PLATELETS_LIMIT: f64 = 150_000.0;

pub const WBC_POINTS: u32 = 1;
pub const BANDS_POINTS: u32 = 1;
pub const RATIO_IT_POINTS: u32 = 2;
pub const RATIO_IM_POINTS: u32 = 1;
pub const PLATELETS_POINTS: u32 = 1;
pub const TOXIC_GRANULATION_POINTS: u32 = 1;

/// Highest attainable score.
pub const MAX_SCORE: u32 = WBC_POINTS
    + BANDS_POINTS
    + RATIO_IT_POINTS
    + RATIO_IM_POINTS
    + PLATELETS_POINTS
    + TOXIC_GRANULATION_POINTS;

/// Evaluate each scoring condition independently.
pub fn score_breakdown(
    wbc: f64,
    bands: f64,
    ratio_it: f64,
    ratio_im: f64,
    platelets: f64,
    toxic_granulation_present: bool,
) -> ScoreBreakdown {
    ScoreBreakdown {
        wbc_out_of_range: wbc < WBC_LOW_LIMIT || wbc > WBC_HIGH_LIMIT,
        bands_elevated: bands > BANDS_LIMIT,
        ratio_it_elevated: ratio_it > RATIO_IT_LIMIT,
        ratio_im_elevated: ratio_im > RATIO_IM_LIMIT,
        platelets_low: platelets < PLATELETS_LIMIT,
        toxic_granulation: toxic_granulation_present,
    }
}

/// Sum of the points for every condition met (0 to [`MAX_SCORE`]).
pub fn compute_rodwell_score(
    wbc: f64,
    bands: f64,
    ratio_it: f64,
    ratio_im: f64,
    platelets: f64,
    toxic_granulation_present: bool,
) -> u32 {
    score_breakdown(wbc, bands, ratio_it, ratio_im, platelets, toxic_granulation_present).points()
}

/// Number of checked maternal risk factors.
///
/// Only tells whether an infection workup is indicated; it is not part of the score.
pub fn count_maternal_risk_factors(flags: &MaternalRiskFlags) -> u32 {
    flags.selected().len() as u32
}

impl ScoreBreakdown {
    /// Conditions paired with the points each one is worth.
    pub fn weighted(&self) -> [(bool, u32); 6] {
        [
            (self.wbc_out_of_range, WBC_POINTS),
            (self.bands_elevated, BANDS_POINTS),
            (self.ratio_it_elevated, RATIO_IT_POINTS),
            (self.ratio_im_elevated, RATIO_IM_POINTS),
            (self.platelets_low, PLATELETS_POINTS),
            (self.toxic_granulation, TOXIC_GRANULATION_POINTS),
        ]
    }

    /// Total points for the conditions that were met.
    pub fn points(&self) -> u32 {
        self.weighted()
            .iter()
            .filter(|(met, _)| *met)
            .map(|(_, points)| points)
            .sum()
    }
}

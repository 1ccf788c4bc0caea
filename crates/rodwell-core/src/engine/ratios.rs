//! Neutrophil ratios.

use serde::{Deserialize, Serialize};

use crate::models::LabPanel;

/// I/T and I/M ratios.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NeutrophilRatios {
    /// Immature / total neutrophils
    pub ratio_it: f64,
    /// Immature / segmented neutrophils
    pub ratio_im: f64,
}

/// Compute both ratios from the differential counts.
///
/// A zero denominator yields a ratio of 0.
pub fn compute_neutrophil_ratios(
    segs: f64,
    bands: f64,
    metamyelocytes: f64,
    myelocytes: f64,
) -> NeutrophilRatios {
    let immature = bands + metamyelocytes + myelocytes;
    let total = segs + immature;

    NeutrophilRatios {
        ratio_it: safe_ratio(immature, total),
        ratio_im: safe_ratio(immature, segs),
    }
}

/// Ratios for a coerced lab panel.
pub fn panel_ratios(panel: &LabPanel) -> NeutrophilRatios {
    compute_neutrophil_ratios(
        panel.segmented_count,
        panel.band_count,
        panel.metamyelocyte_count,
        panel.myelocyte_count,
    )
}

fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

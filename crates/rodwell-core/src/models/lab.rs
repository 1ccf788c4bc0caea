//! Laboratory differential count.

use serde::{Deserialize, Serialize};

/// Blood count values after numeric coercion.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct LabPanel {
    /// Total white blood cells (/mm³)
    pub total_wbc: f64,
    pub segmented_count: f64,
    pub band_count: f64,
    pub metamyelocyte_count: f64,
    pub myelocyte_count: f64,
    /// Platelets (/mm³)
    pub platelet_count: f64,
    pub toxic_granulation_present: bool,
}

impl LabPanel {
    /// Segmented plus every immature form.
    pub fn total_neutrophils(&self) -> f64 {
        self.segmented_count + self.immature_neutrophils()
    }

    /// Bands, metamyelocytes and myelocytes.
    pub fn immature_neutrophils(&self) -> f64 {
        self.band_count + self.metamyelocyte_count + self.myelocyte_count
    }
}

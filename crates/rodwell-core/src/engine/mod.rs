//! Score engine.
//!
//! Pipeline: form text → coercion → ratios → score
//!
//! Everything here is a pure function of its inputs. Front ends call
//! [`ScoreEngine::evaluate`] after every field edit and render the result.

mod coerce;
mod hours;
mod ratios;
mod score;

pub use coerce::*;
pub use hours::*;
pub use ratios::*;
pub use score::*;

use crate::models::{BirthRecord, DerivedResult, LabPanel, RodwellForm};

/// Maps a form snapshot to its derived result.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEngine;

impl ScoreEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compute every output for the given snapshot. Never fails.
    pub fn evaluate(&self, form: &RodwellForm) -> DerivedResult {
        let record = self.birth_record(form);
        let panel = self.lab_panel(form);
        let ratios = panel_ratios(&panel);

        let criteria = score_breakdown(
            panel.total_wbc,
            panel.band_count,
            ratios.ratio_it,
            ratios.ratio_im,
            panel.platelet_count,
            panel.toxic_granulation_present,
        );

        let hours_of_life = hours_of_life(&record);
        let sample_before_birth = match (record.birth_timestamp(), record.sample_time) {
            (Some(birth), Some(sample)) => sample < birth,
            _ => false,
        };

        let result = DerivedResult {
            hours_of_life,
            ratio_it: ratios.ratio_it,
            ratio_im: ratios.ratio_im,
            maternal_risk_count: count_maternal_risk_factors(&form.maternal_risks),
            rodwell_score: criteria.points(),
            criteria,
            sample_before_birth,
        };

        log::debug!(
            "Evaluated form: hours={} I/T={:.3} I/M={:.3} score={} maternal_risks={}",
            result.hours_of_life,
            result.ratio_it,
            result.ratio_im,
            result.rodwell_score,
            result.maternal_risk_count
        );

        result
    }

    /// Parse the birth timing fields. Unreadable values become `None`.
    pub fn birth_record(&self, form: &RodwellForm) -> BirthRecord {
        BirthRecord {
            birth_date: or_missing(parse_date(&form.birth_date)),
            birth_time: or_missing(parse_time(&form.birth_time)),
            sample_time: or_missing(parse_date_time(&form.sample_time)),
            birth_weight_grams: or_missing(parse_count(&form.birth_weight)),
        }
    }

    /// Coerce the lab fields to numbers.
    pub fn lab_panel(&self, form: &RodwellForm) -> LabPanel {
        LabPanel {
            total_wbc: coerce_count(&form.wbc),
            segmented_count: coerce_count(&form.segs),
            band_count: coerce_count(&form.bands),
            metamyelocyte_count: coerce_count(&form.metamyelocytes),
            myelocyte_count: coerce_count(&form.myelocytes),
            platelet_count: coerce_count(&form.platelets),
            toxic_granulation_present: form.toxic_granulation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FormField, MaternalRisk};

    fn septic_form() -> RodwellForm {
        let mut form = RodwellForm::new();
        form.set(FormField::BirthDate, "2024-01-01");
        form.set(FormField::BirthTime, "08:00");
        form.set(FormField::SampleTime, "2024-01-02T08:00");
        form.set(FormField::Wbc, "32000");
        form.set(FormField::Segs, "4000");
        form.set(FormField::Bands, "1700");
        form.set(FormField::Metamyelocytes, "0");
        form.set(FormField::Myelocytes, "0");
        form.set(FormField::Platelets, "140000");
        form.set_toxic_granulation(true);
        form
    }

    #[test]
    fn test_evaluate_full_form() {
        let result = ScoreEngine::new().evaluate(&septic_form());

        assert_eq!(result.hours_of_life, 24);
        assert!((result.ratio_it - 0.298).abs() < 0.001);
        assert!((result.ratio_im - 0.425).abs() < 1e-12);
        assert_eq!(result.rodwell_score, 7);
        assert_eq!(result.maternal_risk_count, 0);
        assert!(!result.sample_before_birth);
    }

    #[test]
    fn test_maternal_risks_do_not_change_score() {
        let engine = ScoreEngine::new();
        let mut form = septic_form();
        form.set(FormField::Wbc, "12000");
        let before = engine.evaluate(&form);

        form.set_risk(MaternalRisk::Chorioamnionitis, true);
        form.set_risk(MaternalRisk::RupturedMembranes, true);
        let after = engine.evaluate(&form);

        assert_eq!(after.maternal_risk_count, 2);
        assert_eq!(after.rodwell_score, before.rodwell_score);
    }

    #[test]
    fn test_sample_before_birth_flagged() {
        let mut form = septic_form();
        form.set(FormField::SampleTime, "2023-12-31T20:00");
        let result = ScoreEngine::new().evaluate(&form);

        assert_eq!(result.hours_of_life, -12);
        assert!(result.sample_before_birth);
    }

    #[test]
    fn test_empty_form_never_fails() {
        let result = ScoreEngine::new().evaluate(&RodwellForm::new());

        assert_eq!(result.hours_of_life, 0);
        assert_eq!(result.ratio_it, 0.0);
        assert_eq!(result.ratio_im, 0.0);
        // Empty WBC and platelets read as 0, which is below both lower limits
        assert!(result.criteria.wbc_out_of_range);
        assert!(result.criteria.platelets_low);
        assert_eq!(result.rodwell_score, 2);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let engine = ScoreEngine::new();
        let form = septic_form();
        assert_eq!(engine.evaluate(&form), engine.evaluate(&form));
    }

    #[test]
    fn test_birth_record_keeps_weight() {
        let mut form = RodwellForm::new();
        form.set(FormField::BirthWeight, "2450");
        let record = ScoreEngine::new().birth_record(&form);
        assert_eq!(record.birth_weight_grams, Some(2450.0));

        form.set(FormField::BirthWeight, "");
        assert_eq!(ScoreEngine::new().birth_record(&form).birth_weight_grams, None);
    }
}

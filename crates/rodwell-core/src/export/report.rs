//! Formatted calculator report.

use serde::{Deserialize, Serialize};

use crate::engine::{
    ScoreEngine, BANDS_POINTS, PLATELETS_POINTS, RATIO_IM_POINTS, RATIO_IT_POINTS,
    TOXIC_GRANULATION_POINTS, WBC_POINTS,
};
use crate::models::{DerivedResult, RodwellForm, ScoreBreakdown};

/// Scoring table illustration served by the dashboard.
pub const REFERENCE_IMAGE: &str = "/imgs/calculatorimgs/rodwell.png";

/// Reminder shown above the maternal risk checklist.
pub const MATERNAL_RISK_ADVISORY: &str =
    "Maternal risk factors only indicate whether an infection workup is needed; they do not change the score.";

/// One row of the scoring table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CriterionRow {
    /// Condition description
    pub label: String,
    /// Points the condition is worth
    pub points: u32,
    /// Whether the condition was met
    pub met: bool,
}

/// Display-ready calculator output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultReport {
    /// Hours of life, e.g. `24h`
    pub hours_of_life: String,
    /// I/T ratio to two decimals
    pub ratio_it: String,
    /// I/M ratio to two decimals
    pub ratio_im: String,
    pub maternal_risk_count: u32,
    pub rodwell_score: u32,
    pub birth_weight_grams: Option<f64>,
    pub sample_before_birth: bool,
    pub criteria: Vec<CriterionRow>,
    /// Labels of checked maternal risk factors
    pub maternal_risks: Vec<String>,
    pub advisory: String,
    pub reference_image: String,
    /// Unformatted values
    pub raw: DerivedResult,
}

impl ResultReport {
    /// Evaluate a form and format the result.
    pub fn from_form(form: &RodwellForm) -> Self {
        let engine = ScoreEngine::new();
        let result = engine.evaluate(form);
        let record = engine.birth_record(form);

        Self {
            hours_of_life: format!("{}h", result.hours_of_life),
            ratio_it: format_ratio(result.ratio_it),
            ratio_im: format_ratio(result.ratio_im),
            maternal_risk_count: result.maternal_risk_count,
            rodwell_score: result.rodwell_score,
            birth_weight_grams: record.birth_weight_grams,
            sample_before_birth: result.sample_before_birth,
            criteria: criterion_rows(&result.criteria),
            maternal_risks: form
                .maternal_risks
                .selected()
                .into_iter()
                .map(|risk| risk.label().to_string())
                .collect(),
            advisory: MATERNAL_RISK_ADVISORY.to_string(),
            reference_image: REFERENCE_IMAGE.to_string(),
            raw: result,
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Render as plain text for terminals.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("Hours of life: {}\n", self.hours_of_life));
        if self.sample_before_birth {
            out.push_str("  (sample time is before birth time)\n");
        }
        if let Some(weight) = self.birth_weight_grams {
            out.push_str(&format!("Birth weight: {} g\n", weight));
        }
        out.push_str(&format!("I/T ratio: {}\n", self.ratio_it));
        out.push_str(&format!("I/M ratio: {}\n", self.ratio_im));
        out.push_str(&format!("Maternal risk factors: {}\n", self.maternal_risk_count));
        for label in &self.maternal_risks {
            out.push_str(&format!("  - {}\n", label));
        }
        out.push_str(&format!("  {}\n", self.advisory));

        out.push_str("\nCriteria:\n");
        for row in &self.criteria {
            let mark = if row.met { 'x' } else { ' ' };
            out.push_str(&format!("  [{}] {} (+{})\n", mark, row.label, row.points));
        }

        out.push_str(&format!("\nRodwell score: {}\n", self.rodwell_score));
        out
    }
}

/// Ratios are shown with two decimals.
pub fn format_ratio(ratio: f64) -> String {
    format!("{:.2}", ratio)
}

fn criterion_rows(criteria: &ScoreBreakdown) -> Vec<CriterionRow> {
    let rows = [
        ("WBC < 5000 or > 30000", criteria.wbc_out_of_range, WBC_POINTS),
        ("Bands > 1600", criteria.bands_elevated, BANDS_POINTS),
        ("I/T ratio > 0.20", criteria.ratio_it_elevated, RATIO_IT_POINTS),
        ("I/M ratio > 0.30", criteria.ratio_im_elevated, RATIO_IM_POINTS),
        ("Platelets < 150000", criteria.platelets_low, PLATELETS_POINTS),
        ("Toxic granulation or vacuolization", criteria.toxic_granulation, TOXIC_GRANULATION_POINTS),
    ];

    rows.into_iter()
        .map(|(label, met, points)| CriterionRow {
            label: label.to_string(),
            points,
            met,
        })
        .collect()
}

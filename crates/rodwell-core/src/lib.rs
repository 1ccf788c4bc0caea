//! Rodwell Calculator Core Library
//!
//! Neonatal sepsis screening: hours of life, neutrophil ratios and the
//! Rodwell hematologic score, recomputed from the current form on every edit.
//!
//! # Architecture
//!
//! ```text
//!   Form field edit (text / checkbox)
//!                 │
//!                 ▼
//!        ┌─────────────────┐
//!        │   RodwellForm   │  raw snapshot, strings as typed
//!        └────────┬────────┘
//!                 │ ScoreEngine::evaluate
//!                 ▼
//!   coercion ──► BirthRecord + LabPanel
//!                 │
//!         ┌───────┼─────────────┐
//!         ▼       ▼             ▼
//!   hours of   I/T, I/M     maternal risk
//!     life      ratios          count
//!                 │
//!                 ▼
//!          Rodwell score
//!                 │
//!                 ▼
//!    DerivedResult ──► ResultReport (text / JSON)
//! ```
//!
//! # Core Principle
//!
//! **The form always renders.** Missing or unreadable input degrades to 0; no
//! operation in the engine returns an error.
//!
//! # Modules
//!
//! - [`models`]: Domain types (RodwellForm, BirthRecord, LabPanel, DerivedResult, etc.)
//! - [`engine`]: Score engine, input coercion and scoring thresholds
//! - [`export`]: Display formatting and JSON/text reports

pub mod engine;
pub mod export;
pub mod models;

// Re-export commonly used types
pub use engine::{InputError, NeutrophilRatios, ScoreEngine};
pub use export::ResultReport;
pub use models::{
    BirthRecord, DerivedResult, FormField, LabPanel, MaternalRisk, MaternalRiskFlags,
    RodwellForm, ScoreBreakdown,
};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum RodwellError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),
}

impl From<serde_json::Error> for RodwellError {
    fn from(e: serde_json::Error) -> Self {
        RodwellError::SerializationError(e.to_string())
    }
}

impl From<engine::InputError> for RodwellError {
    fn from(e: engine::InputError) -> Self {
        RodwellError::InvalidInput(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for RodwellError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        RodwellError::LockPoisoned(e.to_string())
    }
}

// =========================================================================
// Stateless Functions (exported to FFI)
// =========================================================================

/// Evaluate a complete form snapshot.
#[uniffi::export]
pub fn compute_rodwell(form: FfiRodwellForm) -> FfiDerivedResult {
    let form: RodwellForm = form.into();
    ScoreEngine::new().evaluate(&form).into()
}

/// Whole hours between birth and sample collection (0 if any value is missing).
#[uniffi::export]
pub fn compute_hours_of_life(birth_date: String, birth_time: String, sample_time: String) -> i64 {
    engine::compute_hours_of_life(&birth_date, &birth_time, &sample_time)
}

/// Read a count field without coercion: `None` when empty, error when unreadable.
#[uniffi::export]
pub fn parse_count_field(text: String) -> Result<Option<f64>, RodwellError> {
    Ok(engine::parse_count(&text)?)
}

/// Checklist label for a maternal risk factor.
#[uniffi::export]
pub fn maternal_risk_label(risk: MaternalRisk) -> String {
    risk.label().to_string()
}

// =========================================================================
// Main API Object
// =========================================================================

/// One calculator page: holds the form and recomputes on every edit.
#[derive(uniffi::Object)]
pub struct RodwellCalculator {
    form: Mutex<RodwellForm>,
    engine: ScoreEngine,
}

impl Default for RodwellCalculator {
    fn default() -> Self {
        Self {
            form: Mutex::new(RodwellForm::new()),
            engine: ScoreEngine::new(),
        }
    }
}

#[uniffi::export]
impl RodwellCalculator {
    /// Create a calculator with an empty form.
    #[uniffi::constructor]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    // =========================================================================
    // Field Edits
    // =========================================================================

    /// Update a text field and return the recomputed result.
    pub fn set_field(&self, field: FormField, value: String) -> Result<FfiDerivedResult, RodwellError> {
        let mut form = self.form.lock()?;
        form.set(field, value);
        Ok(self.engine.evaluate(&form).into())
    }

    /// Toggle the toxic granulation checkbox.
    pub fn set_toxic_granulation(&self, present: bool) -> Result<FfiDerivedResult, RodwellError> {
        let mut form = self.form.lock()?;
        form.set_toxic_granulation(present);
        Ok(self.engine.evaluate(&form).into())
    }

    /// Check or uncheck a maternal risk factor.
    pub fn set_maternal_risk(
        &self,
        risk: MaternalRisk,
        checked: bool,
    ) -> Result<FfiDerivedResult, RodwellError> {
        let mut form = self.form.lock()?;
        form.set_risk(risk, checked);
        Ok(self.engine.evaluate(&form).into())
    }

    /// Clear the form.
    pub fn reset(&self) -> Result<FfiDerivedResult, RodwellError> {
        let mut form = self.form.lock()?;
        form.reset();
        Ok(self.engine.evaluate(&form).into())
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Result for the current form.
    pub fn result(&self) -> Result<FfiDerivedResult, RodwellError> {
        let form = self.form.lock()?;
        Ok(self.engine.evaluate(&form).into())
    }

    /// Current form snapshot.
    pub fn form(&self) -> Result<FfiRodwellForm, RodwellError> {
        let form = self.form.lock()?;
        Ok(form.clone().into())
    }

    // =========================================================================
    // Snapshot Import/Export
    // =========================================================================

    /// Current form as JSON.
    pub fn form_json(&self) -> Result<String, RodwellError> {
        let form = self.form.lock()?;
        Ok(serde_json::to_string_pretty(&*form)?)
    }

    /// Replace the whole form from JSON. Missing keys take their defaults.
    pub fn load_form_json(&self, json: String) -> Result<FfiDerivedResult, RodwellError> {
        let loaded: RodwellForm = serde_json::from_str(&json)?;
        let mut form = self.form.lock()?;
        *form = loaded;
        Ok(self.engine.evaluate(&form).into())
    }

    /// Formatted report as JSON.
    pub fn report_json(&self) -> Result<String, RodwellError> {
        let form = self.form.lock()?;
        Ok(ResultReport::from_form(&form).to_json()?)
    }

    /// Formatted report as plain text.
    pub fn report_text(&self) -> Result<String, RodwellError> {
        let form = self.form.lock()?;
        Ok(ResultReport::from_form(&form).to_text())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe form snapshot.
#[derive(Debug, Clone, Default, uniffi::Record)]
pub struct FfiRodwellForm {
    pub birth_date: String,
    pub birth_time: String,
    pub sample_time: String,
    pub birth_weight: String,
    pub wbc: String,
    pub segs: String,
    pub bands: String,
    pub metamyelocytes: String,
    pub myelocytes: String,
    pub platelets: String,
    pub toxic_granulation: bool,
    pub maternal_risks: Vec<MaternalRisk>,
}

impl From<FfiRodwellForm> for RodwellForm {
    fn from(form: FfiRodwellForm) -> Self {
        RodwellForm {
            birth_date: form.birth_date,
            birth_time: form.birth_time,
            sample_time: form.sample_time,
            birth_weight: form.birth_weight,
            wbc: form.wbc,
            segs: form.segs,
            bands: form.bands,
            metamyelocytes: form.metamyelocytes,
            myelocytes: form.myelocytes,
            platelets: form.platelets,
            toxic_granulation: form.toxic_granulation,
            maternal_risks: form.maternal_risks.into_iter().collect(),
        }
    }
}

impl From<RodwellForm> for FfiRodwellForm {
    fn from(form: RodwellForm) -> Self {
        Self {
            maternal_risks: form.maternal_risks.selected(),
            birth_date: form.birth_date,
            birth_time: form.birth_time,
            sample_time: form.sample_time,
            birth_weight: form.birth_weight,
            wbc: form.wbc,
            segs: form.segs,
            bands: form.bands,
            metamyelocytes: form.metamyelocytes,
            myelocytes: form.myelocytes,
            platelets: form.platelets,
            toxic_granulation: form.toxic_granulation,
        }
    }
}

/// FFI-safe derived result, with display strings alongside the raw values.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiDerivedResult {
    pub hours_of_life: i64,
    pub ratio_it: f64,
    pub ratio_im: f64,
    pub ratio_it_display: String,
    pub ratio_im_display: String,
    pub maternal_risk_count: u32,
    pub rodwell_score: u32,
    pub sample_before_birth: bool,
}

impl From<DerivedResult> for FfiDerivedResult {
    fn from(result: DerivedResult) -> Self {
        Self {
            hours_of_life: result.hours_of_life,
            ratio_it: result.ratio_it,
            ratio_im: result.ratio_im,
            ratio_it_display: export::format_ratio(result.ratio_it),
            ratio_im_display: export::format_ratio(result.ratio_im),
            maternal_risk_count: result.maternal_risk_count,
            rodwell_score: result.rodwell_score,
            sample_before_birth: result.sample_before_birth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculator_recomputes_on_each_edit() {
        let calc = RodwellCalculator::new();

        let r = calc.set_field(FormField::BirthDate, "2024-01-01".into()).unwrap();
        assert_eq!(r.hours_of_life, 0);
        calc.set_field(FormField::BirthTime, "08:00".into()).unwrap();
        let r = calc.set_field(FormField::SampleTime, "2024-01-02T08:00".into()).unwrap();
        assert_eq!(r.hours_of_life, 24);

        calc.set_field(FormField::Wbc, "12000".into()).unwrap();
        calc.set_field(FormField::Platelets, "250000".into()).unwrap();
        let r = calc.result().unwrap();
        assert_eq!(r.rodwell_score, 0);

        let r = calc.set_toxic_granulation(true).unwrap();
        assert_eq!(r.rodwell_score, 1);

        let r = calc.set_maternal_risk(MaternalRisk::Uti, true).unwrap();
        assert_eq!(r.maternal_risk_count, 1);
        assert_eq!(r.rodwell_score, 1);
    }

    #[test]
    fn test_display_strings() {
        let calc = RodwellCalculator::new();
        calc.set_field(FormField::Segs, "4000".into()).unwrap();
        let r = calc.set_field(FormField::Bands, "1000".into()).unwrap();

        assert_eq!(r.ratio_it_display, "0.20");
        assert_eq!(r.ratio_im_display, "0.25");
    }

    #[test]
    fn test_reset() {
        let calc = RodwellCalculator::new();
        calc.set_field(FormField::Wbc, "40000".into()).unwrap();
        calc.set_maternal_risk(MaternalRisk::Cerclage, true).unwrap();

        let r = calc.reset().unwrap();
        assert_eq!(r.maternal_risk_count, 0);
        assert_eq!(calc.form().unwrap().wbc, "");
    }

    #[test]
    fn test_form_json_round_trip() {
        let calc = RodwellCalculator::new();
        calc.set_field(FormField::Bands, "1700".into()).unwrap();
        calc.set_maternal_risk(MaternalRisk::Chorioamnionitis, true).unwrap();
        let json = calc.form_json().unwrap();

        let other = RodwellCalculator::new();
        let r = other.load_form_json(json).unwrap();
        assert_eq!(r, calc.result().unwrap());
        assert_eq!(other.form().unwrap().maternal_risks, vec![MaternalRisk::Chorioamnionitis]);
    }

    #[test]
    fn test_load_invalid_json() {
        let calc = RodwellCalculator::new();
        let err = calc.load_form_json("{not json".into()).unwrap_err();
        assert!(matches!(err, RodwellError::SerializationError(_)));
    }

    #[test]
    fn test_compute_rodwell_stateless() {
        let form = FfiRodwellForm {
            wbc: "32000".into(),
            segs: "4000".into(),
            bands: "1700".into(),
            metamyelocytes: "0".into(),
            myelocytes: "0".into(),
            platelets: "140000".into(),
            toxic_granulation: true,
            maternal_risks: vec![MaternalRisk::MaternalFever, MaternalRisk::Uti],
            ..Default::default()
        };

        let r = compute_rodwell(form);
        assert_eq!(r.rodwell_score, 7);
        assert_eq!(r.maternal_risk_count, 2);
    }

    #[test]
    fn test_report_exports() {
        let calc = RodwellCalculator::new();
        calc.set_field(FormField::Wbc, "32000".into()).unwrap();

        assert!(calc.report_json().unwrap().contains("\"rodwell_score\""));
        assert!(calc.report_text().unwrap().contains("Rodwell score:"));
    }

    #[test]
    fn test_hours_of_life_export() {
        assert_eq!(
            compute_hours_of_life("2024-01-01".into(), "08:00".into(), "2024-01-02T08:00".into()),
            24
        );
        assert_eq!(compute_hours_of_life(String::new(), "08:00".into(), String::new()), 0);
        assert_eq!(maternal_risk_label(MaternalRisk::Cerclage), "Cervical cerclage");
    }

    #[test]
    fn test_parse_count_field() {
        assert_eq!(parse_count_field("150000".into()).unwrap(), Some(150000.0));
        assert_eq!(parse_count_field("".into()).unwrap(), None);
        assert!(matches!(
            parse_count_field("lots".into()),
            Err(RodwellError::InvalidInput(_))
        ));
    }
}

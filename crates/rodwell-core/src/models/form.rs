//! Raw form state as entered by the user.

use serde::{Deserialize, Serialize};

use super::maternal::{MaternalRisk, MaternalRiskFlags};

/// Text fields on the calculator form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, uniffi::Enum)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    BirthDate,
    BirthTime,
    SampleTime,
    BirthWeight,
    Wbc,
    Segs,
    Bands,
    Metamyelocytes,
    Myelocytes,
    Platelets,
}

/// Snapshot of every form control.
///
/// Values stay as the text the user typed; coercion happens only when the
/// snapshot is evaluated, so a half-typed value never loses input.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RodwellForm {
    /// Birth date (`YYYY-MM-DD`)
    pub birth_date: String,
    /// Birth time of day (`HH:MM`)
    pub birth_time: String,
    /// Sample collection date and time (`YYYY-MM-DDTHH:MM`)
    pub sample_time: String,
    /// Birth weight in grams
    pub birth_weight: String,
    /// Total white blood cell count
    pub wbc: String,
    /// Segmented neutrophils
    pub segs: String,
    /// Band neutrophils
    pub bands: String,
    pub metamyelocytes: String,
    pub myelocytes: String,
    pub platelets: String,
    /// Toxic granulation or vacuolization seen on the smear
    pub toxic_granulation: bool,
    pub maternal_risks: MaternalRiskFlags,
}

impl RodwellForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of a field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::BirthDate => &self.birth_date,
            FormField::BirthTime => &self.birth_time,
            FormField::SampleTime => &self.sample_time,
            FormField::BirthWeight => &self.birth_weight,
            FormField::Wbc => &self.wbc,
            FormField::Segs => &self.segs,
            FormField::Bands => &self.bands,
            FormField::Metamyelocytes => &self.metamyelocytes,
            FormField::Myelocytes => &self.myelocytes,
            FormField::Platelets => &self.platelets,
        }
    }

    /// Replace the text of a field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::BirthDate => &mut self.birth_date,
            FormField::BirthTime => &mut self.birth_time,
            FormField::SampleTime => &mut self.sample_time,
            FormField::BirthWeight => &mut self.birth_weight,
            FormField::Wbc => &mut self.wbc,
            FormField::Segs => &mut self.segs,
            FormField::Bands => &mut self.bands,
            FormField::Metamyelocytes => &mut self.metamyelocytes,
            FormField::Myelocytes => &mut self.myelocytes,
            FormField::Platelets => &mut self.platelets,
        };
        *slot = value.into();
    }

    pub fn set_toxic_granulation(&mut self, present: bool) {
        self.toxic_granulation = present;
    }

    /// Check or uncheck a maternal risk factor.
    pub fn set_risk(&mut self, risk: MaternalRisk, checked: bool) {
        self.maternal_risks.set(risk, checked);
    }

    /// Clear every field back to its initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

//! Maternal risk factor checklist.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the seven maternal risk factors on the checklist.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, uniffi::Enum)]
#[serde(rename_all = "kebab-case")]
pub enum MaternalRisk {
    /// Ruptured membranes for more than 18 hours
    RupturedMembranes,
    /// Preterm labor without apparent cause
    PretermLabor,
    /// Active urinary tract infection, or one treated less than 72h before delivery
    Uti,
    /// Chorioamnionitis
    Chorioamnionitis,
    /// Maternal fever in the 48h before delivery
    MaternalFever,
    /// Cervical cerclage
    Cerclage,
    /// Fetal medicine procedure
    FetalMedicine,
}

impl MaternalRisk {
    /// Every risk factor, in checklist order.
    pub const ALL: [MaternalRisk; 7] = [
        MaternalRisk::RupturedMembranes,
        MaternalRisk::PretermLabor,
        MaternalRisk::Uti,
        MaternalRisk::Chorioamnionitis,
        MaternalRisk::MaternalFever,
        MaternalRisk::Cerclage,
        MaternalRisk::FetalMedicine,
    ];

    /// Stable identifier used on the command line and in JSON.
    pub fn key(self) -> &'static str {
        match self {
            MaternalRisk::RupturedMembranes => "ruptured-membranes",
            MaternalRisk::PretermLabor => "preterm-labor",
            MaternalRisk::Uti => "uti",
            MaternalRisk::Chorioamnionitis => "chorioamnionitis",
            MaternalRisk::MaternalFever => "maternal-fever",
            MaternalRisk::Cerclage => "cerclage",
            MaternalRisk::FetalMedicine => "fetal-medicine",
        }
    }

    /// Checklist label shown next to the checkbox.
    pub fn label(self) -> &'static str {
        match self {
            MaternalRisk::RupturedMembranes => "Ruptured membranes > 18h",
            MaternalRisk::PretermLabor => "Preterm labor without apparent cause",
            MaternalRisk::Uti => "Active UTI or treated < 72h before delivery",
            MaternalRisk::Chorioamnionitis => "Chorioamnionitis",
            MaternalRisk::MaternalFever => "Maternal fever in the 48h before delivery",
            MaternalRisk::Cerclage => "Cervical cerclage",
            MaternalRisk::FetalMedicine => "Fetal medicine procedure",
        }
    }
}

impl fmt::Display for MaternalRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a risk factor key is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown maternal risk factor: {0}")]
pub struct UnknownRiskFactor(pub String);

impl FromStr for MaternalRisk {
    type Err = UnknownRiskFactor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        MaternalRisk::ALL
            .into_iter()
            .find(|risk| risk.key() == lower)
            .ok_or_else(|| UnknownRiskFactor(s.to_string()))
    }
}

/// Checkbox state for every maternal risk factor. All unchecked by default.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MaternalRiskFlags {
    pub ruptured_membranes: bool,
    pub preterm_labor: bool,
    pub uti: bool,
    pub chorioamnionitis: bool,
    pub maternal_fever: bool,
    pub cerclage: bool,
    pub fetal_medicine: bool,
}

impl MaternalRiskFlags {
    /// Whether the given risk factor is checked.
    pub fn get(&self, risk: MaternalRisk) -> bool {
        match risk {
            MaternalRisk::RupturedMembranes => self.ruptured_membranes,
            MaternalRisk::PretermLabor => self.preterm_labor,
            MaternalRisk::Uti => self.uti,
            MaternalRisk::Chorioamnionitis => self.chorioamnionitis,
            MaternalRisk::MaternalFever => self.maternal_fever,
            MaternalRisk::Cerclage => self.cerclage,
            MaternalRisk::FetalMedicine => self.fetal_medicine,
        }
    }

    /// Check or uncheck a risk factor.
    pub fn set(&mut self, risk: MaternalRisk, checked: bool) {
        let slot = match risk {
            MaternalRisk::RupturedMembranes => &mut self.ruptured_membranes,
            MaternalRisk::PretermLabor => &mut self.preterm_labor,
            MaternalRisk::Uti => &mut self.uti,
            MaternalRisk::Chorioamnionitis => &mut self.chorioamnionitis,
            MaternalRisk::MaternalFever => &mut self.maternal_fever,
            MaternalRisk::Cerclage => &mut self.cerclage,
            MaternalRisk::FetalMedicine => &mut self.fetal_medicine,
        };
        *slot = checked;
    }

    /// Checked risk factors, in checklist order.
    pub fn selected(&self) -> Vec<MaternalRisk> {
        MaternalRisk::ALL
            .into_iter()
            .filter(|risk| self.get(*risk))
            .collect()
    }
}

impl FromIterator<MaternalRisk> for MaternalRiskFlags {
    fn from_iter<I: IntoIterator<Item = MaternalRisk>>(iter: I) -> Self {
        let mut flags = Self::default();
        for risk in iter {
            flags.set(risk, true);
        }
        flags
    }
}

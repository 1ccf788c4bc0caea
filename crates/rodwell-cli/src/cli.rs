//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use rodwell_core::models::{FormField, MaternalRisk, RodwellForm};

/// Output format for the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Rodwell neonatal sepsis score calculator.
#[derive(Debug, Parser)]
#[command(name = "rodwell", version, about)]
pub struct Cli {
    /// JSON form file; flags given on the command line override its values
    #[arg(long, value_name = "PATH")]
    pub form: Option<PathBuf>,

    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    pub birth_date: Option<String>,

    /// Birth time (HH:MM)
    #[arg(long)]
    pub birth_time: Option<String>,

    /// Sample collection date and time (YYYY-MM-DDTHH:MM)
    #[arg(long)]
    pub sample_time: Option<String>,

    /// Birth weight in grams
    #[arg(long)]
    pub birth_weight: Option<String>,

    /// Total white blood cells
    #[arg(long)]
    pub wbc: Option<String>,

    /// Segmented neutrophils
    #[arg(long)]
    pub segs: Option<String>,

    /// Band neutrophils
    #[arg(long)]
    pub bands: Option<String>,

    #[arg(long)]
    pub metamyelocytes: Option<String>,

    #[arg(long)]
    pub myelocytes: Option<String>,

    #[arg(long)]
    pub platelets: Option<String>,

    /// Toxic granulation or vacuolization present
    #[arg(long)]
    pub toxic_granulation: bool,

    /// Maternal risk factor (repeatable)
    #[arg(long = "risk", value_name = "KEY", value_parser = parse_risk)]
    pub risks: Vec<MaternalRisk>,

    /// Output format
    #[arg(long, value_enum, env = "RODWELL_FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn parse_risk(s: &str) -> Result<MaternalRisk, String> {
    s.parse::<MaternalRisk>().map_err(|e| {
        let keys: Vec<&str> = MaternalRisk::ALL.iter().map(|r| r.key()).collect();
        format!("{} (expected one of: {})", e, keys.join(", "))
    })
}

impl Cli {
    /// Text fields given as flags.
    fn field_overrides(&self) -> [(FormField, &Option<String>); 10] {
        [
            (FormField::BirthDate, &self.birth_date),
            (FormField::BirthTime, &self.birth_time),
            (FormField::SampleTime, &self.sample_time),
            (FormField::BirthWeight, &self.birth_weight),
            (FormField::Wbc, &self.wbc),
            (FormField::Segs, &self.segs),
            (FormField::Bands, &self.bands),
            (FormField::Metamyelocytes, &self.metamyelocytes),
            (FormField::Myelocytes, &self.myelocytes),
            (FormField::Platelets, &self.platelets),
        ]
    }

    /// Apply command-line values on top of a base form.
    pub fn apply_to(&self, form: &mut RodwellForm) {
        for (field, value) in self.field_overrides() {
            if let Some(value) = value {
                form.set(field, value.as_str());
            }
        }
        if self.toxic_granulation {
            form.set_toxic_granulation(true);
        }
        for risk in &self.risks {
            form.set_risk(*risk, true);
        }
    }

    /// Log level for the requested verbosity.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

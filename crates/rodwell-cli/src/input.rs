//! Form file loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rodwell_core::models::RodwellForm;

/// Read a JSON form snapshot. Missing keys take their defaults.
pub fn load_form(path: &Path) -> Result<RodwellForm> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read form file {}", path.display()))?;
    let form = parse_form(&json)
        .with_context(|| format!("Invalid form file {}", path.display()))?;
    log::info!("Loaded form from {}", path.display());
    Ok(form)
}

/// Parse a JSON form snapshot.
pub fn parse_form(json: &str) -> Result<RodwellForm> {
    Ok(serde_json::from_str(json)?)
}

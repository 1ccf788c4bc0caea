//! `rodwell` command-line calculator.

mod cli;
mod input;

use anyhow::Result;
use clap::Parser;
use rodwell_core::{ResultReport, RodwellForm};

use cli::{Cli, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let mut form = match &cli.form {
        Some(path) => input::load_form(path)?,
        None => RodwellForm::new(),
    };
    cli.apply_to(&mut form);

    let report = ResultReport::from_form(&form);
    if report.sample_before_birth {
        log::warn!("Sample time is before birth time; hours of life is negative");
    }

    match cli.format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}

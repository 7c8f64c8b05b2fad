use std::fs;

use anyhow::{Context, Result};
use clap::Parser;

use wikilint::config::{Args, Config, ReportFormat};
use wikilint::parser::WikiParser;
use wikilint::validation::{ValidationError, ValidatorEngine};

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&args.log_level),
    )
    .init();

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let table = config.character_table()?;
    let parser = WikiParser::new(&table);
    let engine = ValidatorEngine::new(&config.validators)?;

    // configuration errors lead the report; they carry no file name
    let mut report: Vec<ValidationError> = engine.initialization_errors().to_vec();

    for input in &args.inputs {
        let bytes = fs::read(input)
            .with_context(|| format!("failed to read {}", input.display()))?;
        let document = parser
            .parse_bytes(&bytes)
            .with_context(|| format!("failed to decode {}", input.display()))?;
        let mut errors = engine.validate(&document);
        let name = input.display().to_string();
        for error in &mut errors {
            error.set_file_name(name.clone());
        }
        log::info!("{}: {} error(s)", name, errors.len());
        report.extend(errors);
    }

    match args.format {
        ReportFormat::Plain => {
            for error in &report {
                println!("{error}");
            }
        }
        ReportFormat::Json => {
            let entries: Vec<_> = report.iter().map(json_entry).collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    if !report.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

fn json_entry(error: &ValidationError) -> serde_json::Value {
    serde_json::json!({
        "file": error.file_name(),
        "line": error.line_number(),
        "message": error.message(),
        "sentence": error.sentence().map(|s| s.content.clone()),
    })
}

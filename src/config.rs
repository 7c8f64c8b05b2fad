//! Configuration management.
//!
//! Handles:
//! - Command-line argument parsing
//! - The TOML configuration file: an ordered validator list with
//!   per-validator string properties, plus character-table symbol overrides

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Deserialize;

use crate::symbols::CharacterTable;

/// Command-line arguments for the checker.
#[derive(Debug, Parser)]
#[command(name = "wikilint")]
#[command(about = "Style and quality checker for wiki-markup prose documents")]
#[command(version)]
pub struct Args {
    /// Configuration file (TOML) listing validators and symbol overrides
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Report output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Plain)]
    pub format: ReportFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Input documents to inspect
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Plain,
    Json,
}

/// Configuration for one validator: its registry name plus an opaque
/// key→value option map the engine hands to `initialize` uninterpreted.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ValidatorConfig {
    pub name: String,
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

impl ValidatorConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: HashMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

/// Parsed configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Validators to run, in declaration order.
    #[serde(default)]
    pub validators: Vec<ValidatorConfig>,
    /// Symbolic character name → literal character overrides.
    #[serde(default)]
    pub symbols: HashMap<String, String>,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// The default character table with this configuration's symbol
    /// overrides applied. Each override must be exactly one character.
    pub fn character_table(&self) -> Result<CharacterTable> {
        let mut table = CharacterTable::default();
        for (name, value) in &self.symbols {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => table.set_symbol(name.clone(), c),
                _ => bail!("symbol `{name}` must map to exactly one character, got {value:?}"),
            }
        }
        Ok(table)
    }
}

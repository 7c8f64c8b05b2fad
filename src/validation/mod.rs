//! Validator Engine
//!
//! Pluggable rule checks over a parsed [`Document`](crate::model::Document).
//! Each validator is one independent rule behind a single capability
//! interface; the engine walks the document and aggregates every rule's
//! positioned error reports in a deterministic order.

pub mod engine;
pub mod error;
pub mod validators;

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ValidatorConfig;
use crate::model::{Document, Section, Sentence};

pub use engine::ValidatorEngine;
pub use error::ValidationError;
pub use validators::{
    InvalidExpressionValidator, ParagraphNumberValidator, SectionDepthValidator,
    SentenceLengthValidator, SuggestExpressionValidator,
};

/// Which document unit a validator inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Sentence,
    Section,
    Document,
}

/// One text-quality rule. Implementations hold their own private state
/// (loaded tables, compiled patterns), set up once in `initialize` before
/// any check runs. Checks must not mutate the document.
pub trait Validator {
    fn name(&self) -> &'static str;

    fn granularity(&self) -> Granularity;

    /// Load rule-specific resources. Called exactly once, before any check.
    fn initialize(&mut self, config: &ValidatorConfig) -> Result<(), InitError> {
        let _ = config;
        Ok(())
    }

    fn check_sentence(&self, sentence: &Sentence) -> Vec<ValidationError> {
        let _ = sentence;
        Vec::new()
    }

    fn check_section(&self, document: &Document, section: &Section) -> Vec<ValidationError> {
        let _ = (document, section);
        Vec::new()
    }

    fn check_document(&self, document: &Document) -> Vec<ValidationError> {
        let _ = document;
        Vec::new()
    }
}

/// Failure to set up one validator. Reported once and the validator is
/// excluded from the run; never fatal to the engine on its own.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("missing required property `{0}`")]
    MissingProperty(&'static str),
    #[error("invalid value `{value}` for property `{key}`: {reason}")]
    InvalidProperty {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("failed to read resource {path}: {source}")]
    Resource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed resource {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("bad expression pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Engine construction failure.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("none of the {0} configured validators could be initialized")]
    NoValidators(usize),
}

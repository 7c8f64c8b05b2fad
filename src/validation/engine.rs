//! Engine driving configured validators over a document.
//!
//! Ordering is deterministic regardless of how individual checks behave:
//! units in document order outermost (each section, then its sentences;
//! the whole-document unit last), validators in declaration order within
//! each unit.

use std::panic::{self, AssertUnwindSafe};

use crate::config::ValidatorConfig;
use crate::model::Document;
use crate::parser::section_sentences;
use crate::validation::{validators, EngineError, Granularity, ValidationError, Validator};

pub struct ValidatorEngine {
    validators: Vec<Box<dyn Validator>>,
    config_errors: Vec<ValidationError>,
}

impl std::fmt::Debug for ValidatorEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorEngine")
            .field(
                "validators",
                &self.validators.iter().map(|v| v.name()).collect::<Vec<_>>(),
            )
            .field("config_errors", &self.config_errors)
            .finish()
    }
}

impl ValidatorEngine {
    /// Build and initialize every configured validator, in order. A
    /// validator that cannot be created or initialized is reported as a
    /// configuration error and excluded; construction fails only when at
    /// least one validator was configured and none survived.
    pub fn new(configs: &[ValidatorConfig]) -> Result<Self, EngineError> {
        let mut active: Vec<Box<dyn Validator>> = Vec::new();
        let mut config_errors = Vec::new();
        for config in configs {
            let Some(mut validator) = validators::create(&config.name) else {
                log::warn!("unknown validator `{}` skipped", config.name);
                config_errors.push(ValidationError::new(format!(
                    "unknown validator `{}`",
                    config.name
                )));
                continue;
            };
            match validator.initialize(config) {
                Ok(()) => active.push(validator),
                Err(e) => {
                    log::warn!("validator `{}` failed to initialize: {e}", config.name);
                    config_errors.push(ValidationError::new(format!(
                        "failed to initialize validator `{}`: {e}",
                        config.name
                    )));
                }
            }
        }
        if active.is_empty() && !configs.is_empty() {
            return Err(EngineError::NoValidators(configs.len()));
        }
        Ok(Self {
            validators: active,
            config_errors,
        })
    }

    /// Engine over already-initialized validators, bypassing the registry.
    pub fn with_validators(validators: Vec<Box<dyn Validator>>) -> Self {
        Self {
            validators,
            config_errors: Vec::new(),
        }
    }

    /// Configuration errors collected while building the engine, one per
    /// excluded validator.
    pub fn initialization_errors(&self) -> &[ValidationError] {
        &self.config_errors
    }

    pub fn validator_count(&self) -> usize {
        self.validators.len()
    }

    /// Run every validator over every unit of its granularity. A run with
    /// zero defects returns an empty vector.
    pub fn validate(&self, document: &Document) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for section in document.sections() {
            for validator in &self.validators {
                if validator.granularity() == Granularity::Section {
                    guarded(validator.name(), &mut errors, || {
                        validator.check_section(document, section)
                    });
                }
            }
            for sentence in section_sentences(section) {
                for validator in &self.validators {
                    if validator.granularity() == Granularity::Sentence {
                        guarded(validator.name(), &mut errors, || {
                            validator.check_sentence(sentence)
                        });
                    }
                }
            }
        }
        for validator in &self.validators {
            if validator.granularity() == Granularity::Document {
                guarded(validator.name(), &mut errors, || {
                    validator.check_document(document)
                });
            }
        }
        errors
    }
}

/// A fault inside one validator's check must not abort the run: it is
/// caught, logged, and downgraded to a diagnostic error for that validator.
fn guarded(
    name: &str,
    errors: &mut Vec<ValidationError>,
    run: impl FnOnce() -> Vec<ValidationError>,
) {
    match panic::catch_unwind(AssertUnwindSafe(run)) {
        Ok(mut found) => errors.append(&mut found),
        Err(_) => {
            log::error!("validator `{name}` panicked; continuing with remaining units");
            errors.push(ValidationError::new(format!(
                "validator `{name}` failed unexpectedly while checking a unit"
            )));
        }
    }
}

//! Flags sentences longer than a configured character count.

use crate::config::ValidatorConfig;
use crate::model::Sentence;
use crate::validation::{Granularity, InitError, ValidationError, Validator};

const DEFAULT_MAX_LENGTH: usize = 100;

#[derive(Debug)]
pub struct SentenceLengthValidator {
    max_length: usize,
}

impl Default for SentenceLengthValidator {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl SentenceLengthValidator {
    pub fn with_max_length(max_length: usize) -> Self {
        Self { max_length }
    }
}

impl Validator for SentenceLengthValidator {
    fn name(&self) -> &'static str {
        "sentence-length"
    }

    fn granularity(&self) -> Granularity {
        Granularity::Sentence
    }

    fn initialize(&mut self, config: &ValidatorConfig) -> Result<(), InitError> {
        if let Some(value) = config.property("max_length") {
            self.max_length = value.parse().map_err(|_| InitError::InvalidProperty {
                key: "max_length",
                value: value.to_string(),
                reason: "expected a positive integer".to_string(),
            })?;
        }
        Ok(())
    }

    fn check_sentence(&self, sentence: &Sentence) -> Vec<ValidationError> {
        let length = sentence.content.chars().count();
        if length > self.max_length {
            vec![ValidationError::in_sentence(
                format!(
                    "the length of the sentence ({length}) exceeds the maximum of {}",
                    self.max_length
                ),
                sentence,
            )]
        } else {
            Vec::new()
        }
    }
}

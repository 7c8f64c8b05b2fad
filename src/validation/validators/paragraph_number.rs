//! Flags sections with too many paragraphs.

use crate::config::ValidatorConfig;
use crate::model::{Document, Section};
use crate::validation::{Granularity, InitError, ValidationError, Validator};

const DEFAULT_MAX_PARAGRAPHS: usize = 5;

#[derive(Debug)]
pub struct ParagraphNumberValidator {
    max_paragraphs: usize,
}

impl Default for ParagraphNumberValidator {
    fn default() -> Self {
        Self {
            max_paragraphs: DEFAULT_MAX_PARAGRAPHS,
        }
    }
}

impl ParagraphNumberValidator {
    pub fn with_max_paragraphs(max_paragraphs: usize) -> Self {
        Self { max_paragraphs }
    }
}

impl Validator for ParagraphNumberValidator {
    fn name(&self) -> &'static str {
        "paragraph-number"
    }

    fn granularity(&self) -> Granularity {
        Granularity::Section
    }

    fn initialize(&mut self, config: &ValidatorConfig) -> Result<(), InitError> {
        if let Some(value) = config.property("max_paragraphs") {
            self.max_paragraphs = value.parse().map_err(|_| InitError::InvalidProperty {
                key: "max_paragraphs",
                value: value.to_string(),
                reason: "expected a positive integer".to_string(),
            })?;
        }
        Ok(())
    }

    fn check_section(&self, _document: &Document, section: &Section) -> Vec<ValidationError> {
        let count = section.paragraphs().len();
        if count > self.max_paragraphs {
            let line = section.header().first().map(|s| s.position).unwrap_or(0);
            vec![ValidationError::at_line(
                line,
                format!(
                    "the section has {count} paragraphs, exceeding the maximum of {}",
                    self.max_paragraphs
                ),
            )]
        } else {
            Vec::new()
        }
    }
}

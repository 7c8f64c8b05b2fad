//! Flags documents whose header nesting goes too deep.

use crate::config::ValidatorConfig;
use crate::model::Document;
use crate::validation::{Granularity, InitError, ValidationError, Validator};

const DEFAULT_MAX_DEPTH: usize = 3;

#[derive(Debug)]
pub struct SectionDepthValidator {
    max_depth: usize,
}

impl Default for SectionDepthValidator {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SectionDepthValidator {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Validator for SectionDepthValidator {
    fn name(&self) -> &'static str {
        "section-depth"
    }

    fn granularity(&self) -> Granularity {
        Granularity::Document
    }

    fn initialize(&mut self, config: &ValidatorConfig) -> Result<(), InitError> {
        if let Some(value) = config.property("max_depth") {
            self.max_depth = value.parse().map_err(|_| InitError::InvalidProperty {
                key: "max_depth",
                value: value.to_string(),
                reason: "expected a positive integer".to_string(),
            })?;
        }
        Ok(())
    }

    fn check_document(&self, document: &Document) -> Vec<ValidationError> {
        document
            .sections()
            .filter(|section| section.level() > self.max_depth)
            .map(|section| {
                let line = section.header().first().map(|s| s.position).unwrap_or(0);
                ValidationError::at_line(
                    line,
                    format!(
                        "section nesting reaches level {}, exceeding the maximum depth of {}",
                        section.level(),
                        self.max_depth
                    ),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::WikiParser;

    #[test]
    fn test_deep_nesting_flagged() {
        let text = "h1. A.\nh2. B.\nh3. C.\nbody text.\n";
        let doc = WikiParser::default().parse(text);
        let v = SectionDepthValidator::with_max_depth(2);
        let errors = v.check_document(&doc);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line_number(), 2);
    }

    #[test]
    fn test_default_depth_allows_h3() {
        let doc = WikiParser::default().parse("h1. A.\nh2. B.\nh3. C.\n");
        assert!(SectionDepthValidator::default().check_document(&doc).is_empty());
    }
}

//! Flags forbidden words and phrases.
//!
//! The blacklist is a plain text file (`list` property), one expression per
//! line; matching is by substring. One error per distinct expression found
//! in a sentence.

use std::fs;

use crate::config::ValidatorConfig;
use crate::model::Sentence;
use crate::validation::{Granularity, InitError, ValidationError, Validator};

#[derive(Debug, Default)]
pub struct InvalidExpressionValidator {
    expressions: Vec<String>,
}

impl InvalidExpressionValidator {
    pub fn with_expressions(expressions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            expressions: expressions.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validator for InvalidExpressionValidator {
    fn name(&self) -> &'static str {
        "invalid-expression"
    }

    fn granularity(&self) -> Granularity {
        Granularity::Sentence
    }

    fn initialize(&mut self, config: &ValidatorConfig) -> Result<(), InitError> {
        let path = config
            .property("list")
            .ok_or(InitError::MissingProperty("list"))?;
        let text = fs::read_to_string(path).map_err(|source| InitError::Resource {
            path: path.into(),
            source,
        })?;
        self.expressions = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Ok(())
    }

    fn check_sentence(&self, sentence: &Sentence) -> Vec<ValidationError> {
        self.expressions
            .iter()
            .filter(|expression| sentence.content.contains(expression.as_str()))
            .map(|expression| {
                ValidationError::in_sentence(
                    format!("found invalid expression \"{expression}\""),
                    sentence,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_match() {
        let v = InvalidExpressionValidator::with_expressions(["very very", "!!"]);
        let sentence = Sentence::new("it is very very angry.", 4);
        let errors = v.check_sentence(&sentence);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line_number(), 4);
    }

    #[test]
    fn test_clean_sentence() {
        let v = InvalidExpressionValidator::with_expressions(["very very"]);
        let sentence = Sentence::new("it is calm.", 0);
        assert!(v.check_sentence(&sentence).is_empty());
    }

    #[test]
    fn test_missing_list_property() {
        let mut v = InvalidExpressionValidator::default();
        let err = v.initialize(&ValidatorConfig::new("invalid-expression"));
        assert!(matches!(err, Err(InitError::MissingProperty("list"))));
    }
}

//! Suggests preferred replacements for disfavored terms.
//!
//! The synonym table maps a disfavored term to its suggested replacement
//! and is loaded once from a TOML file (`dict` property). A sentence gets
//! one error per distinct matched term, however often the term repeats.

use std::collections::BTreeMap;
use std::fs;

use regex::Regex;

use crate::config::ValidatorConfig;
use crate::model::Sentence;
use crate::validation::{Granularity, InitError, ValidationError, Validator};

#[derive(Debug, Default)]
pub struct SuggestExpressionValidator {
    entries: Vec<Entry>,
}

#[derive(Debug)]
struct Entry {
    word: String,
    suggestion: String,
    pattern: Regex,
}

impl SuggestExpressionValidator {
    /// Build directly from term → suggestion pairs (bypasses the `dict`
    /// file). Terms are matched whole-word, in sorted term order.
    pub fn with_synonyms<K, V>(
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self, InitError>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map: BTreeMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let mut entries = Vec::with_capacity(map.len());
        for (word, suggestion) in map {
            let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(&word)))?;
            entries.push(Entry {
                word,
                suggestion,
                pattern,
            });
        }
        Ok(Self { entries })
    }
}

impl Validator for SuggestExpressionValidator {
    fn name(&self) -> &'static str {
        "suggest-expression"
    }

    fn granularity(&self) -> Granularity {
        Granularity::Sentence
    }

    fn initialize(&mut self, config: &ValidatorConfig) -> Result<(), InitError> {
        let path = config
            .property("dict")
            .ok_or(InitError::MissingProperty("dict"))?;
        let text = fs::read_to_string(path).map_err(|source| InitError::Resource {
            path: path.into(),
            source,
        })?;
        let map: BTreeMap<String, String> =
            toml::from_str(&text).map_err(|source| InitError::Malformed {
                path: path.into(),
                source,
            })?;
        *self = Self::with_synonyms(map)?;
        Ok(())
    }

    fn check_sentence(&self, sentence: &Sentence) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for entry in &self.entries {
            if entry.pattern.is_match(&sentence.content) {
                errors.push(ValidationError::in_sentence(
                    format!(
                        "found invalid expression \"{}\"; use \"{}\" instead",
                        entry.word, entry.suggestion
                    ),
                    sentence,
                ));
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> SuggestExpressionValidator {
        SuggestExpressionValidator::with_synonyms([
            ("like", "such as"),
            ("info", "infomation"),
        ])
        .unwrap()
    }

    #[test]
    fn test_single_match() {
        let sentence = Sentence::new("it like a piece of a cake.", 0);
        assert_eq!(validator().check_sentence(&sentence).len(), 1);
    }

    #[test]
    fn test_no_match() {
        let sentence = Sentence::new("it love a piece of a cake.", 0);
        assert_eq!(validator().check_sentence(&sentence).len(), 0);
    }

    #[test]
    fn test_two_distinct_terms_two_errors() {
        let sentence = Sentence::new("it like a the info.", 0);
        let errors = validator().check_sentence(&sentence);
        assert_eq!(errors.len(), 2);
        // sorted term order keeps the output deterministic
        assert!(errors[0].message().contains("\"info\""));
        assert!(errors[1].message().contains("\"like\""));
    }

    #[test]
    fn test_repeated_term_yields_one_error() {
        let sentence = Sentence::new("like it or not, I like it.", 0);
        assert_eq!(validator().check_sentence(&sentence).len(), 1);
    }

    #[test]
    fn test_whole_word_only() {
        let sentence = Sentence::new("unlike cakes, information is free.", 0);
        assert_eq!(validator().check_sentence(&sentence).len(), 0);
    }

    #[test]
    fn test_empty_sentence() {
        let sentence = Sentence::new("", 0);
        assert_eq!(validator().check_sentence(&sentence).len(), 0);
    }

    #[test]
    fn test_missing_dict_property() {
        let mut v = SuggestExpressionValidator::default();
        let err = v.initialize(&ValidatorConfig::new("suggest-expression"));
        assert!(matches!(err, Err(InitError::MissingProperty("dict"))));
    }
}

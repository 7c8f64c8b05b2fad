//! The shipped validator set.

pub mod invalid_expression;
pub mod paragraph_number;
pub mod section_depth;
pub mod sentence_length;
pub mod suggest_expression;

pub use invalid_expression::InvalidExpressionValidator;
pub use paragraph_number::ParagraphNumberValidator;
pub use section_depth::SectionDepthValidator;
pub use sentence_length::SentenceLengthValidator;
pub use suggest_expression::SuggestExpressionValidator;

use crate::validation::Validator;

/// Look up a validator by its configuration name.
pub fn create(name: &str) -> Option<Box<dyn Validator>> {
    match name {
        "suggest-expression" => Some(Box::new(SuggestExpressionValidator::default())),
        "invalid-expression" => Some(Box::new(InvalidExpressionValidator::default())),
        "sentence-length" => Some(Box::new(SentenceLengthValidator::default())),
        "paragraph-number" => Some(Box::new(ParagraphNumberValidator::default())),
        "section-depth" => Some(Box::new(SectionDepthValidator::default())),
        _ => None,
    }
}

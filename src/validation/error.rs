//! Positioned, human-readable defect reports.

use std::fmt;

use crate::model::Sentence;

/// One defect found by a validator. Immutable once the convenience
/// constructors have populated it; the setters exist for reporting layers
/// (e.g. stamping the file name) and are never used by the validation
/// pipeline itself.
#[derive(Debug, Clone)]
pub struct ValidationError {
    line_number: i64,
    message: String,
    file_name: String,
    sentence: Option<Sentence>,
}

impl ValidationError {
    /// An error with no known position.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            line_number: -1,
            message: message.into(),
            file_name: String::new(),
            sentence: None,
        }
    }

    /// An error at a known input line.
    pub fn at_line(line: usize, message: impl Into<String>) -> Self {
        let mut error = Self::new(message);
        error.line_number = line as i64;
        error
    }

    /// An error attached to the offending sentence; the line number is
    /// taken from the sentence's position.
    pub fn in_sentence(message: impl Into<String>, sentence: &Sentence) -> Self {
        let mut error = Self::at_line(sentence.position, message);
        error.sentence = Some(sentence.clone());
        error
    }

    /// Line number, -1 when unknown.
    pub fn line_number(&self) -> i64 {
        self.line_number
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// File name, empty when not applicable.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn sentence(&self) -> Option<&Sentence> {
        self.sentence.as_ref()
    }

    pub fn set_line_number(&mut self, line: i64) {
        self.line_number = line;
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn set_file_name(&mut self, file_name: impl Into<String>) {
        self.file_name = file_name.into();
    }

    pub fn set_sentence(&mut self, sentence: Sentence) {
        self.sentence = Some(sentence);
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.file_name.is_empty() {
            write!(f, "ValidationError[{} ({})]", self.line_number, self.message)?;
        } else {
            write!(
                f,
                "ValidationError[{}{} ({})]",
                self.file_name, self.line_number, self.message
            )?;
        }
        if let Some(sentence) = &self.sentence {
            write!(f, " at line: {}", sentence.content)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_position() {
        let error = ValidationError::new("broken");
        assert_eq!(error.line_number(), -1);
        assert_eq!(error.file_name(), "");
        assert!(error.sentence().is_none());
        assert_eq!(error.to_string(), "ValidationError[-1 (broken)]");
    }

    #[test]
    fn test_display_with_file_and_sentence() {
        let sentence = Sentence::new("it like a pen.", 7);
        let mut error = ValidationError::in_sentence("found invalid expression", &sentence);
        assert_eq!(error.line_number(), 7);
        error.set_file_name("doc.wiki");
        assert_eq!(
            error.to_string(),
            "ValidationError[doc.wiki7 (found invalid expression)] at line: it like a pen."
        );
    }

    #[test]
    fn test_setters() {
        let mut error = ValidationError::at_line(3, "msg");
        error.set_line_number(9);
        error.set_message("other");
        assert_eq!(error.line_number(), 9);
        assert_eq!(error.message(), "other");
    }
}

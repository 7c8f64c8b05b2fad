//! Sentence boundary scanning.
//!
//! A boundary is a run of consecutive terminator characters followed by
//! whitespace or end of text. A run of ASCII terminators followed by any
//! other character is not a boundary, which keeps `google.com` and `...`
//! inside one sentence. Full-width terminators such as `。` end a sentence
//! no matter what follows, since those scripts do not space after a stop.

use std::collections::HashSet;

use crate::symbols::CharacterTable;

#[derive(Debug, Clone)]
pub struct SentenceExtractor {
    terminators: HashSet<char>,
}

impl SentenceExtractor {
    pub fn new(table: &CharacterTable) -> Self {
        Self {
            terminators: table.terminator_characters(),
        }
    }

    /// Byte offset just past the first sentence boundary in `text`, if any.
    /// The terminator run is part of the sentence.
    pub fn first_boundary(&self, text: &str) -> Option<usize> {
        let mut iter = text.char_indices().peekable();
        while let Some((start, c)) = iter.next() {
            if !self.terminators.contains(&c) {
                continue;
            }
            let mut end = start + c.len_utf8();
            let mut ascii_run = c.is_ascii();
            while let Some(&(pos, next)) = iter.peek() {
                if !self.terminators.contains(&next) {
                    break;
                }
                end = pos + next.len_utf8();
                ascii_run = ascii_run && next.is_ascii();
                iter.next();
            }
            let boundary = match iter.peek() {
                None => true,
                Some(&(_, next)) => next.is_whitespace() || !ascii_run,
            };
            if boundary {
                return Some(end);
            }
        }
        None
    }
}

//! Character Table
//!
//! Locale-specific mapping from symbolic character names (e.g. `FULL_STOP`)
//! to the literal characters a document uses. The parser takes the table as
//! an explicit argument, so parses with different locales can run side by
//! side.

use std::collections::{HashMap, HashSet};

/// Symbols whose values act as sentence terminators.
const TERMINATOR_SYMBOLS: [&str; 3] = ["FULL_STOP", "QUESTION_MARK", "EXCLAMATION_MARK"];

/// Symbolic character name → literal character mapping.
#[derive(Debug, Clone)]
pub struct CharacterTable {
    symbols: HashMap<String, char>,
}

impl Default for CharacterTable {
    fn default() -> Self {
        let mut symbols = HashMap::new();
        symbols.insert("FULL_STOP".to_string(), '.');
        symbols.insert("COMMA".to_string(), ',');
        symbols.insert("QUESTION_MARK".to_string(), '?');
        symbols.insert("EXCLAMATION_MARK".to_string(), '!');
        Self { symbols }
    }
}

impl CharacterTable {
    /// Look up the character assigned to a symbolic name.
    pub fn lookup(&self, name: &str) -> Option<char> {
        self.symbols.get(name).copied()
    }

    /// Assign a character to a symbolic name, replacing any default.
    pub fn set_symbol(&mut self, name: impl Into<String>, value: char) {
        self.symbols.insert(name.into(), value);
    }

    /// The characters that end a sentence under this table.
    pub fn terminator_characters(&self) -> HashSet<char> {
        TERMINATOR_SYMBOLS
            .iter()
            .filter_map(|name| self.lookup(name))
            .collect()
    }

    pub fn is_terminator(&self, c: char) -> bool {
        self.terminator_characters().contains(&c)
    }
}

//! Text-level entities: sentences, paragraphs, and lists.

/// A single sentence with its normalized content.
///
/// `content` is the text after comment stripping, link substitution and
/// emphasis removal. Concatenating a paragraph's sentence contents in order
/// reproduces the paragraph's normalized text exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Normalized sentence text, including its trailing terminator if any.
    pub content: String,
    /// 0-based line number in the original input where the sentence starts.
    pub position: usize,
    /// True for the first sentence produced from its originating line.
    pub is_first_sentence: bool,
    /// Link targets found in this sentence, in order of appearance.
    pub links: Vec<String>,
}

impl Sentence {
    pub fn new(content: impl Into<String>, position: usize) -> Self {
        Self {
            content: content.into(),
            position,
            is_first_sentence: false,
            links: Vec::new(),
        }
    }
}

/// A maximal run of body sentences between structural breaks.
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    pub sentences: Vec<Sentence>,
}

/// A contiguous run of list-item lines.
#[derive(Debug, Clone, Default)]
pub struct ListBlock {
    pub elements: Vec<ListElement>,
}

/// One list item; its text may contain several sentences.
#[derive(Debug, Clone)]
pub struct ListElement {
    /// Nesting depth, 1-based (count of leading marker characters).
    pub level: usize,
    pub sentences: Vec<Sentence>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_defaults() {
        let s = Sentence::new("A pen.", 3);
        assert_eq!(s.content, "A pen.");
        assert_eq!(s.position, 3);
        assert!(!s.is_first_sentence);
        assert!(s.links.is_empty());
    }
}

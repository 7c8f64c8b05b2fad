//! Wiki Markup Parser
//!
//! Turns raw wiki-markup text into a [`Document`]. Two nested passes: a
//! line-oriented block pass (headers, lists, comments, paragraph breaks)
//! driven by an explicit state machine, and a sentence pass that segments
//! running text using the configured [`CharacterTable`] after inline
//! normalization. Malformed markup is tolerated as literal text; only
//! invalid input encoding fails a parse.

pub mod inline;
pub mod sentence;

use thiserror::Error;

use crate::model::{Document, ListBlock, ListElement, Paragraph, Section, SectionId, Sentence};
use crate::parser::inline::InlineText;
use crate::parser::sentence::SentenceExtractor;
use crate::symbols::CharacterTable;

const COMMENT_OPEN: &str = "[!--";
const COMMENT_CLOSE: &str = "--]";
const LIST_MARKERS: [char; 2] = ['-', '#'];

/// Parse failure. Markup is never malformed enough to fail; only the input
/// encoding is.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("input is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

/// Wiki markup parser configured with a character table.
#[derive(Debug, Clone)]
pub struct WikiParser {
    extractor: SentenceExtractor,
}

impl Default for WikiParser {
    fn default() -> Self {
        Self::new(&CharacterTable::default())
    }
}

impl WikiParser {
    pub fn new(table: &CharacterTable) -> Self {
        Self {
            extractor: SentenceExtractor::new(table),
        }
    }

    /// Parse a UTF-8 byte stream.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Document, ParseError> {
        Ok(self.parse(std::str::from_utf8(bytes)?))
    }

    /// Parse already-decoded text. Never fails.
    pub fn parse(&self, text: &str) -> Document {
        let mut run = ParseRun::new(&self.extractor);
        for (line_no, line) in text.lines().enumerate() {
            run.handle_line(line_no, line);
        }
        run.finish()
    }
}

/// Block scanner states. `InComment` remembers the state to resume so a
/// comment never breaks the surrounding paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    None,
    InParagraph,
    InList,
    InComment,
}

/// State for one parse call: section stack, paragraph/list accumulators and
/// the sentence carry buffer for paragraph text spanning lines.
struct ParseRun<'a> {
    extractor: &'a SentenceExtractor,
    doc: Document,
    stack: Vec<SectionId>,
    state: BlockState,
    resume: BlockState,
    pending: InlineText,
    pending_line: usize,
    pending_first: bool,
    paragraph: Option<(SectionId, Paragraph)>,
    list: Option<(SectionId, ListBlock)>,
}

impl<'a> ParseRun<'a> {
    fn new(extractor: &'a SentenceExtractor) -> Self {
        let mut doc = Document::new();
        let root = doc.add_section(0, vec![Sentence::new("", 0)], None);
        Self {
            extractor,
            doc,
            stack: vec![root],
            state: BlockState::None,
            resume: BlockState::None,
            pending: InlineText::default(),
            pending_line: 0,
            pending_first: true,
            paragraph: None,
            list: None,
        }
    }

    fn handle_line(&mut self, line_no: usize, raw: &str) {
        if self.state == BlockState::InComment {
            let Some(close) = raw.find(COMMENT_CLOSE) else {
                return;
            };
            self.state = self.resume;
            let rest = &raw[close + COMMENT_CLOSE.len()..];
            if !rest.trim().is_empty() {
                self.handle_line(line_no, rest);
            }
            return;
        }

        let (stripped, open, had_comment) = strip_comments(raw);
        if stripped.trim().is_empty() {
            if !had_comment && !open {
                // blank line: paragraph and list both end here
                self.close_paragraph();
                self.close_list();
                self.state = BlockState::None;
            }
        } else {
            self.classify(line_no, &stripped);
        }
        if open {
            self.resume = self.state;
            self.state = BlockState::InComment;
        }
    }

    fn classify(&mut self, line_no: usize, text: &str) {
        if let Some((level, header_text)) = parse_header(text) {
            self.open_section(line_no, level, header_text);
        } else if let Some((level, item_text)) = parse_list_item(text) {
            self.list_item(line_no, level, item_text);
        } else {
            self.body_line(line_no, text);
        }
    }

    fn open_section(&mut self, line_no: usize, level: usize, header_text: &str) {
        self.close_paragraph();
        self.close_list();
        let header = self.split_unit(line_no, header_text);
        // a header of level L closes every open section with level >= L
        while self.stack.len() > 1 && self.doc.get(self.current()).level() >= level {
            self.stack.pop();
        }
        let parent = self.current();
        let id = self.doc.add_section(level, header, Some(parent));
        self.stack.push(id);
        self.state = BlockState::None;
    }

    fn list_item(&mut self, line_no: usize, level: usize, item_text: &str) {
        self.close_paragraph();
        let owner = self.current();
        let sentences = self.split_unit(line_no, item_text);
        let (_, block) = self
            .list
            .get_or_insert_with(|| (owner, ListBlock::default()));
        block.elements.push(ListElement { level, sentences });
        self.state = BlockState::InList;
    }

    fn body_line(&mut self, line_no: usize, text: &str) {
        if self.state == BlockState::InList {
            self.close_list();
        }
        if self.paragraph.is_none() {
            self.paragraph = Some((self.current(), Paragraph::default()));
        }
        if self.pending.text.is_empty() {
            self.pending_line = line_no;
            self.pending_first = true;
        }
        self.pending.append(inline::evaluate(text));
        while let Some(end) = self.extractor.first_boundary(&self.pending.text) {
            let sentence = take_sentence(
                &mut self.pending,
                end,
                self.pending_line,
                self.pending_first,
            );
            self.pending_first = false;
            self.pending_line = line_no;
            if let Some((_, paragraph)) = &mut self.paragraph {
                paragraph.sentences.push(sentence);
            }
        }
        self.state = BlockState::InParagraph;
    }

    /// Sentence-split a self-contained unit (header text, list-item text).
    fn split_unit(&self, line_no: usize, text: &str) -> Vec<Sentence> {
        let mut buf = inline::evaluate(text);
        let mut sentences = Vec::new();
        let mut first = true;
        while let Some(end) = self.extractor.first_boundary(&buf.text) {
            sentences.push(take_sentence(&mut buf, end, line_no, first));
            first = false;
        }
        if !buf.text.is_empty() {
            let rest = std::mem::take(&mut buf);
            sentences.push(take_sentence_all(rest, line_no, first));
        }
        sentences
    }

    /// Turn any carried paragraph text into a final, unterminated sentence.
    fn flush_pending(&mut self) {
        if self.pending.text.is_empty() {
            self.pending.links.clear();
            return;
        }
        let rest = std::mem::take(&mut self.pending);
        let sentence = take_sentence_all(rest, self.pending_line, self.pending_first);
        if let Some((_, paragraph)) = &mut self.paragraph {
            paragraph.sentences.push(sentence);
        }
    }

    fn close_paragraph(&mut self) {
        self.flush_pending();
        if let Some((owner, paragraph)) = self.paragraph.take() {
            if !paragraph.sentences.is_empty() {
                self.doc.attach_paragraph(owner, paragraph);
            }
        }
    }

    fn close_list(&mut self) {
        if let Some((owner, list)) = self.list.take() {
            self.doc.attach_list(owner, list);
        }
    }

    fn current(&self) -> SectionId {
        self.stack[self.stack.len() - 1]
    }

    fn finish(mut self) -> Document {
        self.close_paragraph();
        self.close_list();
        self.doc
    }
}

/// Split the first `end` bytes of `buf` off as a sentence, keeping links
/// whose offsets fall inside it and rebasing the rest.
fn take_sentence(buf: &mut InlineText, end: usize, position: usize, is_first: bool) -> Sentence {
    let rest_text = buf.text.split_off(end);
    let content = std::mem::replace(&mut buf.text, rest_text);
    let keep = buf
        .links
        .iter()
        .position(|&(offset, _)| offset >= end)
        .unwrap_or(buf.links.len());
    let rest_links = buf.links.split_off(keep);
    let links = std::mem::replace(&mut buf.links, rest_links)
        .into_iter()
        .map(|(_, link)| link)
        .collect();
    buf.links.iter_mut().for_each(|(offset, _)| *offset -= end);
    Sentence {
        content,
        position,
        is_first_sentence: is_first,
        links,
    }
}

/// Consume a whole buffer as one sentence (the missing-final-period case).
fn take_sentence_all(buf: InlineText, position: usize, is_first: bool) -> Sentence {
    Sentence {
        content: buf.text,
        position,
        is_first_sentence: is_first,
        links: buf.links.into_iter().map(|(_, link)| link).collect(),
    }
}

/// `h<digit>. text` — the digit is the header level.
fn parse_header(line: &str) -> Option<(usize, &str)> {
    let rest = line.strip_prefix('h')?;
    let digit = rest.chars().next()?.to_digit(10)?;
    if digit == 0 {
        return None;
    }
    let rest = rest[1..].strip_prefix('.')?;
    let text = rest.strip_prefix(' ').unwrap_or(rest);
    Some((digit as usize, text))
}

/// A run of one list marker character plus its required space separator.
fn parse_list_item(line: &str) -> Option<(usize, &str)> {
    let marker = line.chars().next()?;
    if !LIST_MARKERS.contains(&marker) {
        return None;
    }
    let level = line.chars().take_while(|&c| c == marker).count();
    let text = line[level..].strip_prefix(' ')?;
    Some((level, text))
}

/// Remove every closed `[!-- ... --]` span from a line. Returns the
/// remaining text, whether an unclosed comment was opened, and whether any
/// comment delimiter was seen at all.
fn strip_comments(line: &str) -> (String, bool, bool) {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    let mut found = false;
    loop {
        let Some(open) = rest.find(COMMENT_OPEN) else {
            out.push_str(rest);
            return (out, false, found);
        };
        found = true;
        out.push_str(&rest[..open]);
        let after_open = &rest[open + COMMENT_OPEN.len()..];
        let Some(close) = after_open.find(COMMENT_CLOSE) else {
            return (out, true, true);
        };
        rest = &after_open[close + COMMENT_CLOSE.len()..];
    }
}

/// Every sentence of a section in document order: header fragments first,
/// then paragraphs, then list elements.
pub fn section_sentences(section: &Section) -> impl Iterator<Item = &Sentence> {
    section
        .header()
        .iter()
        .chain(section.paragraphs().iter().flat_map(|p| p.sentences.iter()))
        .chain(
            section
                .lists()
                .iter()
                .flat_map(|l| l.elements.iter())
                .flat_map(|e| e.sentences.iter()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_line() {
        assert_eq!(parse_header("h1. About Gunma."), Some((1, "About Gunma.")));
        assert_eq!(parse_header("h2. Gunma "), Some((2, "Gunma ")));
        assert_eq!(parse_header("hello world"), None);
        assert_eq!(parse_header("h0. nope"), None);
        assert_eq!(parse_header("h1 no dot"), None);
    }

    #[test]
    fn test_parse_list_item_line() {
        assert_eq!(parse_list_item("- Tokyu"), Some((1, "Tokyu")));
        assert_eq!(parse_list_item("-- Toyoko Line"), Some((2, "Toyoko Line")));
        assert_eq!(parse_list_item("## Ordered"), Some((2, "Ordered")));
        // a marker run without its separator is body text
        assert_eq!(parse_list_item("-5 degrees"), None);
        assert_eq!(parse_list_item("plain"), None);
    }

    #[test]
    fn test_strip_comments_closed_span() {
        let (text, open, found) = strip_comments("keep [!-- drop --] this");
        assert_eq!(text, "keep  this");
        assert!(!open);
        assert!(found);
    }

    #[test]
    fn test_strip_comments_degenerate_forms() {
        assert_eq!(strip_comments("[!----]"), (String::new(), false, true));
        assert_eq!(strip_comments("[!-- --]"), (String::new(), false, true));
    }

    #[test]
    fn test_strip_comments_unclosed() {
        let (text, open, found) = strip_comments("before [!-- trailing");
        assert_eq!(text, "before ");
        assert!(open);
        assert!(found);
    }

    #[test]
    fn test_comment_free_line_untouched() {
        let (text, open, found) = strip_comments("nothing here");
        assert_eq!(text, "nothing here");
        assert!(!open);
        assert!(!found);
    }

    #[test]
    fn test_empty_input_yields_root_only() {
        let doc = WikiParser::default().parse("");
        assert_eq!(doc.section_count(), 1);
        assert_eq!(doc.root().level(), 0);
        assert_eq!(doc.root().header().len(), 1);
        assert_eq!(doc.root().header()[0].content, "");
        assert!(doc.root().paragraphs().is_empty());
    }

    #[test]
    fn test_parse_bytes_rejects_invalid_utf8() {
        let parser = WikiParser::default();
        let err = parser.parse_bytes(&[0x68, 0x31, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, ParseError::Encoding(_)));
    }

    #[test]
    fn test_sentence_carry_across_lines() {
        let doc = WikiParser::default().parse(
            "This is a good day.\nHongo is located at the west of Tokyo \nwhich is the capital of Japan \nwhich is not located in the south of the earth.",
        );
        let paragraph = &doc.root().paragraphs()[0];
        assert_eq!(paragraph.sentences.len(), 2);
        assert_eq!(paragraph.sentences[0].position, 0);
        assert_eq!(paragraph.sentences[1].position, 1);
        assert!(paragraph.sentences[1].is_first_sentence);
        let rebuilt: String = paragraph
            .sentences
            .iter()
            .map(|s| s.content.as_str())
            .collect();
        assert_eq!(
            rebuilt,
            "This is a good day.Hongo is located at the west of Tokyo \
             which is the capital of Japan \
             which is not located in the south of the earth."
        );
    }
}

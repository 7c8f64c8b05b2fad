//! Inline normalization: link substitution and emphasis stripping.
//!
//! Runs on a line's text before sentence boundary scanning, so terminator
//! characters hidden inside `[[...]]` targets cannot split a sentence.
//! Extracted link targets keep byte offsets into the rewritten text; the
//! parser later assigns each link to the sentence whose span contains it.

const LINK_OPEN: &str = "[[";
const LINK_CLOSE: &str = "]]";
const EMPHASIS: &str = "//";

/// A line after inline normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineText {
    pub text: String,
    /// (byte offset into `text`, link target), sorted by offset.
    pub links: Vec<(usize, String)>,
}

impl InlineText {
    /// Append another normalized fragment, shifting its link offsets.
    pub fn append(&mut self, other: InlineText) {
        let base = self.text.len();
        self.text.push_str(&other.text);
        self.links
            .extend(other.links.into_iter().map(|(o, l)| (base + o, l)));
    }
}

/// Normalize one line of running text.
pub fn evaluate(line: &str) -> InlineText {
    let (text, links) = substitute_links(line);
    strip_emphasis(text, links)
}

/// Replace `[[target]]` / `[[display|target]]` / `[[display|target|…]]`
/// spans with their display text, collecting targets. An unmatched `[[` is
/// left verbatim and yields no link entry.
fn substitute_links(line: &str) -> (String, Vec<(usize, String)>) {
    let mut out = String::with_capacity(line.len());
    let mut links = Vec::new();
    let mut rest = line;

    while let Some(open) = rest.find(LINK_OPEN) {
        let Some(close) = rest[open + LINK_OPEN.len()..].find(LINK_CLOSE) else {
            break;
        };
        out.push_str(&rest[..open]);
        let inner = &rest[open + LINK_OPEN.len()..open + LINK_OPEN.len() + close];
        let fields: Vec<&str> = inner.split('|').map(str::trim).collect();
        let (display, target) = if fields.len() == 1 {
            (fields[0], fields[0])
        } else if fields[0].is_empty() {
            (fields[1], fields[1])
        } else {
            (fields[0], fields[1])
        };
        links.push((out.len(), target.to_string()));
        out.push_str(display);
        rest = &rest[open + LINK_OPEN.len() + close + LINK_CLOSE.len()..];
    }
    out.push_str(rest);
    (out, links)
}

/// Remove paired `//` delimiters, keeping the enclosed text. Link offsets
/// are shifted left past every removed delimiter.
fn strip_emphasis(text: String, links: Vec<(usize, String)>) -> InlineText {
    let mut removals = Vec::new();
    let mut from = 0;
    while let Some(first) = text[from..].find(EMPHASIS) {
        let first = from + first;
        let Some(second) = text[first + EMPHASIS.len()..].find(EMPHASIS) else {
            break;
        };
        let second = first + EMPHASIS.len() + second;
        removals.push(first);
        removals.push(second);
        from = second + EMPHASIS.len();
    }

    if removals.is_empty() {
        return InlineText { text, links };
    }

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for &pos in &removals {
        out.push_str(&text[cursor..pos]);
        cursor = pos + EMPHASIS.len();
    }
    out.push_str(&text[cursor..]);

    let links = links
        .into_iter()
        .map(|(offset, link)| {
            let shift = removals.iter().filter(|&&p| p < offset).count() * EMPHASIS.len();
            (offset - shift, link)
        })
        .collect();
    InlineText { text: out, links }
}

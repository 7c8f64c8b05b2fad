//! Section arena and document container.
//!
//! Sections form a tree via level-based nesting, but the tree is stored as
//! an arena: the `Document` owns every `Section` in creation order and the
//! sections point at each other through `SectionId` handles. Creation order
//! equals document order, so indexed access walks the document top to bottom.

use crate::model::text::{ListBlock, Paragraph, Sentence};

/// Handle into a document's section arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionId(usize);

/// A parsed document: one root section (level 0) plus every header-delimited
/// subtree, all owned by the arena.
#[derive(Debug, Default)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a section and wire it into its parent's subsection list.
    pub(crate) fn add_section(
        &mut self,
        level: usize,
        header: Vec<Sentence>,
        parent: Option<SectionId>,
    ) -> SectionId {
        let id = SectionId(self.sections.len());
        self.sections.push(Section {
            id,
            level,
            parent,
            header,
            subsections: Vec::new(),
            paragraphs: Vec::new(),
            lists: Vec::new(),
        });
        if let Some(parent) = parent {
            self.sections[parent.0].subsections.push(id);
        }
        id
    }

    pub(crate) fn attach_paragraph(&mut self, id: SectionId, paragraph: Paragraph) {
        self.sections[id.0].paragraphs.push(paragraph);
    }

    pub(crate) fn attach_list(&mut self, id: SectionId, list: ListBlock) {
        self.sections[id.0].lists.push(list);
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Section by document-order index. Panics if out of range.
    pub fn section(&self, index: usize) -> &Section {
        &self.sections[index]
    }

    /// Resolve a section handle.
    pub fn get(&self, id: SectionId) -> &Section {
        &self.sections[id.0]
    }

    /// The implicit root section (level 0).
    pub fn root(&self) -> &Section {
        &self.sections[0]
    }

    /// All sections in document order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }
}

/// A header-delimited subtree of the document.
#[derive(Debug)]
pub struct Section {
    id: SectionId,
    level: usize,
    parent: Option<SectionId>,
    header: Vec<Sentence>,
    subsections: Vec<SectionId>,
    paragraphs: Vec<Paragraph>,
    lists: Vec<ListBlock>,
}

impl Section {
    pub fn id(&self) -> SectionId {
        self.id
    }

    /// Header depth; 0 is the implicit document root.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Parent section handle; `None` only for the root.
    pub fn parent_id(&self) -> Option<SectionId> {
        self.parent
    }

    /// Header-content fragments (a header line may hold several).
    pub fn header(&self) -> &[Sentence] {
        &self.header
    }

    pub fn subsection_ids(&self) -> &[SectionId] {
        &self.subsections
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn lists(&self) -> &[ListBlock] {
        &self.lists
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_child_wiring() {
        let mut doc = Document::new();
        let root = doc.add_section(0, vec![Sentence::new("", 0)], None);
        let child = doc.add_section(1, vec![Sentence::new("Title.", 1)], Some(root));

        assert_eq!(doc.section_count(), 2);
        assert_eq!(doc.get(child).parent_id(), Some(root));
        assert_eq!(doc.root().subsection_ids(), &[child]);
        assert_eq!(doc.section(1).level(), 1);
    }

    #[test]
    fn test_attach_paragraph() {
        let mut doc = Document::new();
        let root = doc.add_section(0, vec![Sentence::new("", 0)], None);
        let mut paragraph = Paragraph::default();
        paragraph.sentences.push(Sentence::new("Hello.", 0));
        doc.attach_paragraph(root, paragraph);

        assert_eq!(doc.root().paragraphs().len(), 1);
        assert_eq!(doc.root().paragraphs()[0].sentences[0].content, "Hello.");
    }
}

//! Document Model
//!
//! Pure data representation of a parsed document. No parsing or
//! validation logic lives here.

pub mod document;
pub mod text;

pub use document::{Document, Section, SectionId};
pub use text::{ListBlock, ListElement, Paragraph, Sentence};

//! wikilint
//!
//! Style and quality inspection for prose documents written in a
//! lightweight wiki-style markup.
//!
//! This library provides:
//! - A wiki markup parser producing a hierarchical document model
//! - Locale-sensitive sentence segmentation via a character table
//! - A validator engine running pluggable, independent rule checks
//! - Configuration management for validators and symbol overrides

pub mod config;
pub mod model;
pub mod parser;
pub mod symbols;
pub mod validation;

// Re-exports for clean public API
pub use config::{Config, ValidatorConfig};
pub use model::{Document, ListBlock, ListElement, Paragraph, Section, Sentence};
pub use parser::{ParseError, WikiParser};
pub use symbols::CharacterTable;
pub use validation::{ValidationError, Validator, ValidatorEngine};

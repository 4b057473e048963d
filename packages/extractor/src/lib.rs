//! Statute Extractor - Stream articles out of WordprocessingML statutes.
//!
//! This crate reads a statute stored as a WordprocessingML (Word 2003 XML)
//! document and yields its articles as `(title, body)` sections, in document
//! order, without ever building a tree of the whole document.
//!
//! # Example
//!
//! ```
//! use statute_extractor::{ExtractorConfig, Sections};
//!
//! let xml = r#"<w:wordDocument xmlns:w="http://schemas.microsoft.com/office/word/2003/wordml">
//!   <w:body>
//!     <w:p><w:r><w:t>Статья 1</w:t></w:r></w:p>
//!     <w:p><w:r><w:t>Text of article one.</w:t></w:r></w:p>
//!     <w:p><w:r><w:t>Статья 2</w:t></w:r></w:p>
//!   </w:body>
//! </w:wordDocument>"#;
//!
//! let sections: Vec<_> = Sections::from_reader(xml.as_bytes(), ExtractorConfig::default())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(sections.len(), 1);
//! assert_eq!(sections[0].title, "Статья 1");
//! assert_eq!(sections[0].body, "Text of article one.");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Marker, namespace and trailing-section policy
//! - [`error`]: Error types and Result alias
//! - [`paragraph`]: Event cursor yielding one string per paragraph
//! - [`accumulator`]: Boundary detection state machine
//! - [`sections`]: Lazy section iterator tying the two together
//! - [`types`]: The `Section` value

pub mod accumulator;
pub mod config;
pub mod error;
pub mod paragraph;
pub mod sections;
pub mod types;

pub use accumulator::SectionAccumulator;
pub use config::{
    validate_marker, ExtractorConfig, TrailingSection, ARTICLE_MARKER, WORDML_NAMESPACE,
};
pub use error::{ExtractorError, Result};
pub use paragraph::ParagraphReader;
pub use sections::{extract_sections, Sections};
pub use types::Section;

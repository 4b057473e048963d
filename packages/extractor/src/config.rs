//! Configuration constants and validation functions for the extractor.

use crate::error::{ExtractorError, Result};

/// Namespace of WordprocessingML 2003 (the `w:` prefix in `.xml` Word exports).
pub const WORDML_NAMESPACE: &str = "http://schemas.microsoft.com/office/word/2003/wordml";

/// Local name of the paragraph element.
pub const PARAGRAPH_TAG: &str = "p";

/// Paragraph prefix that opens a new article ("Article ").
///
/// The trailing space is part of the marker, so "Статьями" or "Статья"
/// on its own never start a section.
pub const ARTICLE_MARKER: &str = "Статья ";

/// What to do with the section still open when the document ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingSection {
    /// Never emit it. A section is only closed by the next marker, so the
    /// last article of a document is not yielded.
    #[default]
    Drop,

    /// Emit the open section at end of input.
    Emit,
}

/// Settings for a section extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Namespace URI the paragraph element must be bound to.
    pub namespace: String,

    /// Local name of the paragraph element.
    pub paragraph_tag: String,

    /// Literal prefix of a title paragraph. Case-sensitive.
    pub marker: String,

    /// Policy for the section open at end of input.
    pub trailing: TrailingSection,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            namespace: WORDML_NAMESPACE.to_string(),
            paragraph_tag: PARAGRAPH_TAG.to_string(),
            marker: ARTICLE_MARKER.to_string(),
            trailing: TrailingSection::Drop,
        }
    }
}

impl ExtractorConfig {
    /// Replace the boundary marker after validating it.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Result<Self> {
        let marker = marker.into();
        validate_marker(&marker)?;
        self.marker = marker;
        Ok(self)
    }

    /// Match paragraphs in a different namespace.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the trailing section policy.
    #[must_use]
    pub fn with_trailing(mut self, trailing: TrailingSection) -> Self {
        self.trailing = trailing;
        self
    }

    /// Check whether a trimmed paragraph opens a new section.
    #[must_use]
    pub fn is_boundary(&self, paragraph: &str) -> bool {
        paragraph.starts_with(&self.marker)
    }
}

/// Validate a section marker.
///
/// Paragraph text is trimmed before matching, so a marker that is empty or
/// starts with whitespace would either match everything or nothing.
///
/// # Examples
/// ```
/// use statute_extractor::config::validate_marker;
///
/// assert!(validate_marker("Статья ").is_ok());
/// assert!(validate_marker("").is_err());
/// assert!(validate_marker(" Статья").is_err());
/// ```
pub fn validate_marker(marker: &str) -> Result<()> {
    match marker.chars().next() {
        Some(first) if !first.is_whitespace() => Ok(()),
        _ => Err(ExtractorError::InvalidMarker(marker.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExtractorConfig::default();
        assert_eq!(config.namespace, WORDML_NAMESPACE);
        assert_eq!(config.paragraph_tag, "p");
        assert_eq!(config.marker, "Статья ");
        assert_eq!(config.trailing, TrailingSection::Drop);
    }

    #[test]
    fn test_is_boundary() {
        let config = ExtractorConfig::default();
        assert!(config.is_boundary("Статья 1"));
        assert!(config.is_boundary("Статья 34. Порядок заключения контракта"));
        assert!(!config.is_boundary("статья 1")); // case-sensitive
        assert!(!config.is_boundary("Статьями 1 и 2"));
        assert!(!config.is_boundary("Статья"));
        assert!(!config.is_boundary("См. Статья 5"));
    }

    #[test]
    fn test_with_marker() {
        let config = ExtractorConfig::default().with_marker("Article ").unwrap();
        assert!(config.is_boundary("Article 7"));
        assert!(!config.is_boundary("Статья 7"));
    }

    #[test]
    fn test_with_marker_rejects_invalid() {
        assert!(ExtractorConfig::default().with_marker("").is_err());
        assert!(ExtractorConfig::default().with_marker("\tСтатья").is_err());
    }
}

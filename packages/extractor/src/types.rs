//! Core data types for the extractor.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Article designation right after the marker: "34", "12.1", "93-1".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARTICLE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\S+\s+(\d+(?:[.\-]\d+)*)").expect("valid regex")
});

/// A titled span of statute text.
///
/// `title` is the paragraph that opened the section, verbatim after
/// trimming. `body` is every following paragraph up to the next title,
/// joined with `\n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub body: String,
}

impl Section {
    /// Create a new section.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Article number following the marker word, if the title carries one.
    ///
    /// # Examples
    /// ```
    /// use statute_extractor::Section;
    ///
    /// let section = Section::new("Статья 34. Порядок заключения контракта", "");
    /// assert_eq!(section.article_number(), Some("34"));
    ///
    /// let section = Section::new("Статья 12.1", "");
    /// assert_eq!(section.article_number(), Some("12.1"));
    /// ```
    #[must_use]
    pub fn article_number(&self) -> Option<&str> {
        ARTICLE_NUMBER
            .captures(&self.title)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Number of body lines (paragraphs) in this section.
    #[must_use]
    pub fn paragraph_count(&self) -> usize {
        if self.body.is_empty() {
            0
        } else {
            self.body.split('\n').count()
        }
    }
}

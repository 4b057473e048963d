//! Boundary detection state for section extraction.

use crate::types::Section;

/// Finite-state accumulator for the section being read.
///
/// Holds the title of the open section (if a marker has been seen) and the
/// paragraphs read since. Text before the first marker belongs to no section
/// and is not kept.
#[derive(Debug, Default)]
pub struct SectionAccumulator {
    title: Option<String>,
    body: Vec<String>,
}

impl SectionAccumulator {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one paragraph.
    ///
    /// When `is_boundary` is true the paragraph becomes the new title and the
    /// previously open section, if any, is returned.
    pub fn push_paragraph(&mut self, text: String, is_boundary: bool) -> Option<Section> {
        if !is_boundary {
            if self.title.is_some() {
                self.body.push(text);
            }
            return None;
        }

        let body = std::mem::take(&mut self.body);
        self.title
            .replace(text)
            .map(|title| Section::new(title, body.join("\n")))
    }

    /// Title of the open section.
    #[must_use]
    pub fn current_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Number of paragraphs accumulated since the last title.
    #[must_use]
    pub fn pending_paragraphs(&self) -> usize {
        self.body.len()
    }

    /// Close the open section without a following marker.
    pub fn take_pending(&mut self) -> Option<Section> {
        let body = std::mem::take(&mut self.body);
        self.title
            .take()
            .map(|title| Section::new(title, body.join("\n")))
    }
}

//! Lazy section iterator.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::accumulator::SectionAccumulator;
use crate::config::{ExtractorConfig, TrailingSection};
use crate::error::{ExtractorError, Result};
use crate::paragraph::ParagraphReader;
use crate::types::Section;

/// Forward-only sequence of sections read from a document.
///
/// Each call to `next` reads just far enough to close one section. The
/// iterator owns the document handle: dropping it before the end (for
/// example after taking the first few sections) closes the file. After an
/// error the iterator is exhausted.
pub struct Sections<R: BufRead> {
    paragraphs: ParagraphReader<R>,
    accumulator: SectionAccumulator,
    config: ExtractorConfig,
    emitted: usize,
    finished: bool,
}

impl Sections<BufReader<File>> {
    /// Open a document on disk.
    ///
    /// Fails with `NotFound` before any parsing when the path does not exist.
    pub fn open(path: impl AsRef<Path>, config: ExtractorConfig) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ExtractorError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;
        tracing::debug!(path = %path.display(), "opened document for section extraction");
        Ok(Self::from_reader(BufReader::new(file), config))
    }
}

impl<R: BufRead> Sections<R> {
    /// Extract sections from any buffered source.
    pub fn from_reader(source: R, config: ExtractorConfig) -> Self {
        Self {
            paragraphs: ParagraphReader::new(source, &config),
            accumulator: SectionAccumulator::new(),
            config,
            emitted: 0,
            finished: false,
        }
    }

    /// Number of sections yielded so far.
    #[must_use]
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    fn next_section(&mut self) -> Result<Option<Section>> {
        while let Some(text) = self.paragraphs.next_paragraph()? {
            let is_boundary = self.config.is_boundary(&text);
            if let Some(section) = self.accumulator.push_paragraph(text, is_boundary) {
                return Ok(Some(section));
            }
        }

        self.finished = true;
        Ok(self.finish())
    }

    /// Apply the trailing-section policy at end of input.
    fn finish(&mut self) -> Option<Section> {
        match self.config.trailing {
            TrailingSection::Emit => self.accumulator.take_pending(),
            TrailingSection::Drop => {
                if let Some(title) = self.accumulator.current_title() {
                    tracing::warn!(
                        title = %title,
                        paragraphs = self.accumulator.pending_paragraphs(),
                        "document ended without a closing marker, last section not emitted"
                    );
                }
                None
            }
        }
    }
}

impl<R: BufRead> Iterator for Sections<R> {
    type Item = Result<Section>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_section() {
            Ok(Some(section)) => {
                self.emitted += 1;
                tracing::debug!(
                    title = %section.title,
                    paragraphs = section.paragraph_count(),
                    "section extracted"
                );
                Some(Ok(section))
            }
            Ok(None) => None,
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Open `path` with the default article marker and WordprocessingML namespace.
pub fn extract_sections(path: impl AsRef<Path>) -> Result<Sections<BufReader<File>>> {
    Sections::open(path, ExtractorConfig::default())
}

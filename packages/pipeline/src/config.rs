use std::path::PathBuf;

use statute_extractor::{validate_marker, ExtractorConfig, ARTICLE_MARKER};
use statute_memory::MemoryLevel;

use crate::error::{PipelineError, Result};

/// Consolidated text of 44-FZ exported as WordprocessingML.
pub const DEFAULT_DOCUMENT_PATH: &str = "doc_domain_44fz/cons/44-FZ/44-FZ-2026.xml";

pub const DEFAULT_STORE_PATH: &str = ".rlm_test/memory_bridge_v2.db";

/// Sections stored per run before extraction is abandoned.
pub const DEFAULT_MAX_SECTIONS: usize = 5;

/// Body characters kept in each fact.
pub const DEFAULT_PREVIEW_CHARS: usize = 200;

pub const DEFAULT_DOMAIN: &str = "44-fz-structure";

pub const DEFAULT_SOURCE: &str = "xml_parser";

/// Substring whose presence in a stored fact confirms the run.
pub const DEFAULT_TARGET: &str = "Статья 1";

/// Text wrap width for fact listings.
pub const TEXT_WRAP_WIDTH: usize = 100;

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub document_path: PathBuf,
    pub store_path: PathBuf,
    /// `None` drains the whole document.
    pub max_sections: Option<usize>,
    pub preview_chars: usize,
    pub level: MemoryLevel,
    pub domain: String,
    pub source: String,
    pub target: String,
    /// Paragraph prefix that opens a section. Validated by every setter.
    pub marker: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            document_path: DEFAULT_DOCUMENT_PATH.into(),
            store_path: DEFAULT_STORE_PATH.into(),
            max_sections: Some(DEFAULT_MAX_SECTIONS),
            preview_chars: DEFAULT_PREVIEW_CHARS,
            level: MemoryLevel::L1Domain,
            domain: DEFAULT_DOMAIN.to_string(),
            source: DEFAULT_SOURCE.to_string(),
            target: DEFAULT_TARGET.to_string(),
            marker: ARTICLE_MARKER.to_string(),
        }
    }
}

impl PipelineConfig {
    pub fn new(document_path: impl Into<PathBuf>, store_path: impl Into<PathBuf>) -> Self {
        Self {
            document_path: document_path.into(),
            store_path: store_path.into(),
            ..Self::default()
        }
    }

    /// Defaults overridden by `STATUTE_DOCUMENT`, `STATUTE_STORE`,
    /// `STATUTE_MAX_SECTIONS`, `STATUTE_PREVIEW_CHARS` and `STATUTE_MARKER`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("STATUTE_DOCUMENT") {
            config.document_path = path.into();
        }

        if let Ok(path) = std::env::var("STATUTE_STORE") {
            config.store_path = path.into();
        }

        if let Ok(value) = std::env::var("STATUTE_MAX_SECTIONS") {
            config.max_sections = match value.as_str() {
                "all" => None,
                other => Some(other.parse().map_err(|_| {
                    PipelineError::Config(format!(
                        "STATUTE_MAX_SECTIONS must be a number or 'all', got '{other}'"
                    ))
                })?),
            };
        }

        if let Ok(value) = std::env::var("STATUTE_PREVIEW_CHARS") {
            config.preview_chars = value.parse().map_err(|_| {
                PipelineError::Config(format!(
                    "STATUTE_PREVIEW_CHARS must be a number, got '{value}'"
                ))
            })?;
        }

        if let Ok(marker) = std::env::var("STATUTE_MARKER") {
            config = config.with_marker(marker)?;
        }

        Ok(config)
    }

    pub fn with_max_sections(mut self, max_sections: Option<usize>) -> Self {
        self.max_sections = max_sections;
        self
    }

    pub fn with_preview_chars(mut self, preview_chars: usize) -> Self {
        self.preview_chars = preview_chars;
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_level(mut self, level: MemoryLevel) -> Self {
        self.level = level;
        self
    }

    /// Replace the section marker after validating it.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Result<Self> {
        let marker = marker.into();
        validate_marker(&marker)?;
        self.marker = marker;
        Ok(self)
    }

    /// Extractor settings for this run. Fails on an unusable marker.
    pub fn extractor_config(&self) -> Result<ExtractorConfig> {
        Ok(ExtractorConfig::default().with_marker(self.marker.clone())?)
    }
}

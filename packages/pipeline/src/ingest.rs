use serde::{Deserialize, Serialize};
use statute_extractor::Section;
use statute_memory::{FactStore, NewFact};

use crate::config::PipelineConfig;
use crate::error::Result;

/// Outcome of one ingestion pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestReport {
    pub stored: usize,
    pub fact_ids: Vec<i64>,
    /// `max_sections` sections were stored and extraction stopped there.
    ///
    /// The extractor is not asked for another section, so this does not say
    /// whether the document had more articles.
    pub cap_reached: bool,
}

/// Fact text for a section: the title, a newline, then the first
/// `preview_chars` characters of the body followed by `...`.
///
/// The suffix is appended even when the body is shorter than the preview.
///
/// # Examples
/// ```
/// use statute_extractor::Section;
/// use statute_pipeline::fact_content;
///
/// let section = Section::new("Статья 1", "text A");
/// assert_eq!(fact_content(&section, 200), "Статья 1\ntext A...");
/// ```
pub fn fact_content(section: &Section, preview_chars: usize) -> String {
    let preview: String = section.body.chars().take(preview_chars).collect();
    format!("{}\n{}...", section.title, preview)
}

/// Store one fact per section, pulling at most `config.max_sections`
/// sections from `sections`.
///
/// Once the cap is reached no further item is requested, so the rest of the
/// document is never parsed. The first extraction or storage error aborts
/// the pass.
pub fn ingest<I>(sections: I, store: &FactStore, config: &PipelineConfig) -> Result<IngestReport>
where
    I: IntoIterator<Item = statute_extractor::Result<Section>>,
{
    let limit = config.max_sections.unwrap_or(usize::MAX);
    let mut fact_ids = Vec::new();

    for item in sections.into_iter().take(limit) {
        let section = item?;
        let fact = store.add_fact(NewFact::new(
            fact_content(&section, config.preview_chars),
            config.level,
            config.domain.clone(),
            config.source.clone(),
        ))?;

        tracing::debug!(id = fact.id, title = %section.title, "section stored");
        fact_ids.push(fact.id);
    }

    let stored = fact_ids.len();
    Ok(IngestReport {
        stored,
        cap_reached: config.max_sections == Some(stored),
        fact_ids,
    })
}

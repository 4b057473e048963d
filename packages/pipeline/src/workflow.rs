use serde::{Deserialize, Serialize};
use statute_extractor::Sections;
use statute_memory::FactStore;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::ingest::{ingest, IngestReport};
use crate::reasoning::ScriptedReasoner;
use crate::validate::{validate_facts, ValidationOutcome, ValidationReport};

/// Canned answer of the reasoning collaborator for this workflow.
const SCRIPTED_ANSWER: &str = "FINAL(Связь обнаружена: Статья 34 изменена Статьей 112)";

/// Characters of a matched fact shown in the log.
const LOG_PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowReport {
    pub ingest: IngestReport,
    pub validation: ValidationReport,
}

/// Run the ingestion workflow end to end.
///
/// 1. Open the document (a missing document fails here, before the store
///    is touched).
/// 2. Reset the fact store.
/// 3. Store the first `max_sections` sections, then drop the extractor.
/// 4. Read every fact back and look for `target`.
///
/// Extraction and storage failures are returned as errors. A missing target
/// or an empty store is logged and reported in the returned report.
pub fn run_workflow(config: &PipelineConfig) -> Result<WorkflowReport> {
    tracing::info!(
        document = %config.document_path.display(),
        store = %config.store_path.display(),
        "starting statute ingestion"
    );

    let sections = Sections::open(&config.document_path, config.extractor_config()?)?;

    let reasoner = ScriptedReasoner::new([SCRIPTED_ANSWER]).with_sandbox(true);
    tracing::debug!(
        responses = reasoner.response_count(),
        sandboxed = reasoner.is_sandboxed(),
        "reasoner ready"
    );

    let store = FactStore::reset(&config.store_path)?;

    tracing::info!("processing document in streaming mode");
    let ingest_report = ingest(sections, &store, config)?;
    tracing::info!(
        stored = ingest_report.stored,
        cap_reached = ingest_report.cap_reached,
        "indexing finished"
    );

    tracing::info!("validating fact store");
    let facts = store.get_all_facts()?;
    let validation = validate_facts(&facts, &config.target);

    match validation.outcome {
        ValidationOutcome::Found => {
            tracing::info!(total = validation.total, "facts stored");
            for fact in facts.iter().filter(|f| validation.matched.contains(&f.id)) {
                let preview: String = fact.content.chars().take(LOG_PREVIEW_CHARS).collect();
                tracing::info!(id = fact.id, "target fact found: {preview}...");
            }
        }
        ValidationOutcome::TargetMissing => {
            tracing::error!(
                total = validation.total,
                target = %validation.target,
                "target fact not found in store"
            );
        }
        ValidationOutcome::EmptyStore => {
            tracing::error!("no facts found in store");
        }
    }

    store.close()?;

    Ok(WorkflowReport {
        ingest: ingest_report,
        validation,
    })
}

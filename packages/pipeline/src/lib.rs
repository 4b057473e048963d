//! Statute Pipeline - Stream statute articles into the fact store.
//!
//! Drains the section extractor into the hierarchical fact store, then
//! reads the store back and checks that an expected fact was captured.
//!
//! - [`config`]: Pipeline settings and environment overrides
//! - [`ingest`]: Section-to-fact conversion with an early-stop cap
//! - [`validate`]: Non-fatal scan of stored facts for a target
//! - [`reasoning`]: Contract of the reasoning collaborator
//! - [`workflow`]: The end-to-end run
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod ingest;
pub mod reasoning;
pub mod validate;
pub mod workflow;

pub use config::PipelineConfig;
pub use error::{PipelineError, Result};
pub use ingest::{fact_content, ingest, IngestReport};
pub use reasoning::{parse_final, Reasoner, ScriptedReasoner};
pub use validate::{validate_facts, ValidationOutcome, ValidationReport};
pub use workflow::{run_workflow, WorkflowReport};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("extraction failed: {0}")]
    Extract(#[from] statute_extractor::ExtractorError),

    #[error("fact store error: {0}")]
    Memory(#[from] statute_memory::MemoryError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("reasoner error: {0}")]
    Reasoning(String),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

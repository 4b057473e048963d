#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use statute_pipeline::PipelineConfig;
use tempfile::TempDir;

/// Wrap paragraphs in a minimal WordprocessingML document.
pub fn wordml(paragraphs: &[String]) -> String {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>\n"))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<w:wordDocument xmlns:w="http://schemas.microsoft.com/office/word/2003/wordml">
<w:body>
{body}</w:body>
</w:wordDocument>"#
    )
}

/// Preamble, then `k` articles with two body lines each, then a closing
/// marker when `closing_marker` is set.
pub fn statute(k: usize, closing_marker: bool) -> Vec<String> {
    let mut paragraphs = vec!["ФЕДЕРАЛЬНЫЙ ЗАКОН".to_string()];
    for i in 1..=k {
        paragraphs.push(format!("Статья {i}"));
        paragraphs.push(format!("article {i} first line"));
        paragraphs.push(format!("article {i} second line"));
    }
    if closing_marker {
        paragraphs.push(format!("Статья {}", k + 1));
    }
    paragraphs
}

/// Scratch directory holding one document and a store location.
pub struct Workspace {
    pub dir: TempDir,
    pub document: PathBuf,
    pub store: PathBuf,
}

impl Workspace {
    pub fn with_document(paragraphs: &[String]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let document = dir.path().join("44-FZ-2026.xml");
        fs::write(&document, wordml(paragraphs)).unwrap();
        let store = dir.path().join(".rlm_test").join("memory_bridge_v2.db");
        Self {
            dir,
            document,
            store,
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> PipelineConfig {
        PipelineConfig::new(&self.document, &self.store)
    }
}

//! Contract of the reasoning collaborator.
//!
//! A reasoner turns a prompt plus stored facts into a terminal answer of the
//! form `FINAL(...)`. The ingestion workflow only constructs one; answering
//! relationship questions ("article A amended by article B") is left to its
//! callers.

use std::sync::LazyLock;

use regex::Regex;
use statute_memory::Fact;

use crate::error::{PipelineError, Result};

/// Terminal answer marker. The payload may span several lines.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static FINAL_ANSWER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)FINAL\((.*)\)\s*$").expect("valid regex"));

pub trait Reasoner {
    /// Produce a terminal `FINAL(...)` answer for `prompt` given `facts`.
    fn final_answer(&mut self, prompt: &str, facts: &[Fact]) -> Result<String>;
}

/// Reasoner replaying a fixed list of responses in order, wrapping around
/// at the end.
#[derive(Debug, Clone)]
pub struct ScriptedReasoner {
    responses: Vec<String>,
    next: usize,
    sandboxed: bool,
}

impl ScriptedReasoner {
    pub fn new(responses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            next: 0,
            sandboxed: true,
        }
    }

    /// Allow or forbid side effects in the reasoning step. Scripted replies
    /// have none, so this is recorded only.
    pub fn with_sandbox(mut self, sandboxed: bool) -> Self {
        self.sandboxed = sandboxed;
        self
    }

    pub fn is_sandboxed(&self) -> bool {
        self.sandboxed
    }

    pub fn response_count(&self) -> usize {
        self.responses.len()
    }
}

impl Reasoner for ScriptedReasoner {
    fn final_answer(&mut self, prompt: &str, facts: &[Fact]) -> Result<String> {
        if self.responses.is_empty() {
            return Err(PipelineError::Reasoning("no scripted responses".to_string()));
        }

        let answer = self.responses[self.next % self.responses.len()].clone();
        self.next += 1;

        tracing::debug!(
            prompt_chars = prompt.chars().count(),
            facts = facts.len(),
            "scripted reasoner answered"
        );

        if parse_final(&answer).is_none() {
            return Err(PipelineError::Reasoning(format!(
                "response is not a FINAL(...) answer: {answer}"
            )));
        }
        Ok(answer)
    }
}

/// Payload of a `FINAL(...)` answer, trimmed.
///
/// # Examples
/// ```
/// use statute_pipeline::parse_final;
///
/// assert_eq!(
///     parse_final("FINAL(Связь обнаружена: Статья 34 изменена Статьей 112)"),
///     Some("Связь обнаружена: Статья 34 изменена Статьей 112")
/// );
/// assert_eq!(parse_final("thinking..."), None);
/// ```
pub fn parse_final(answer: &str) -> Option<&str> {
    FINAL_ANSWER
        .captures(answer)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_reasoner_cycles() {
        let mut reasoner = ScriptedReasoner::new(["FINAL(first)", "FINAL(second)"]);
        assert_eq!(reasoner.final_answer("q", &[]).unwrap(), "FINAL(first)");
        assert_eq!(reasoner.final_answer("q", &[]).unwrap(), "FINAL(second)");
        assert_eq!(reasoner.final_answer("q", &[]).unwrap(), "FINAL(first)");
    }

    #[test]
    fn test_scripted_reasoner_empty() {
        let mut reasoner = ScriptedReasoner::new(Vec::<String>::new());
        assert!(matches!(
            reasoner.final_answer("q", &[]),
            Err(PipelineError::Reasoning(_))
        ));
    }

    #[test]
    fn test_scripted_reasoner_rejects_non_final() {
        let mut reasoner = ScriptedReasoner::new(["maybe"]);
        assert!(reasoner.final_answer("q", &[]).is_err());
    }

    #[test]
    fn test_sandbox_flag() {
        let reasoner = ScriptedReasoner::new(["FINAL(x)"]);
        assert!(reasoner.is_sandboxed());
        assert!(!reasoner.with_sandbox(false).is_sandboxed());
    }

    #[test]
    fn test_parse_final_multiline_and_prefix() {
        assert_eq!(parse_final("Reasoning done.\nFINAL(a\nb)\n"), Some("a\nb"));
        assert_eq!(parse_final("FINAL()"), Some(""));
        assert_eq!(parse_final("FINAL(unterminated"), None);
    }
}

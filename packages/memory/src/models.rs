use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::MemoryError;

/// Abstraction level of a fact, from project-wide down to single code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemoryLevel {
    /// Project-wide facts.
    #[serde(rename = "L0_PROJECT")]
    L0Project,

    /// Facts about a whole domain, e.g. the structure of one statute.
    #[serde(rename = "L1_DOMAIN")]
    L1Domain,

    /// Facts about one part of a domain, e.g. a chapter.
    #[serde(rename = "L2_MODULE")]
    L2Module,

    /// Fine-grained facts, e.g. a single provision.
    #[serde(rename = "L3_CODE")]
    L3Code,
}

impl MemoryLevel {
    pub const ALL: [MemoryLevel; 4] = [
        Self::L0Project,
        Self::L1Domain,
        Self::L2Module,
        Self::L3Code,
    ];

    /// Stable tag used for storage.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::L0Project => "L0_PROJECT",
            Self::L1Domain => "L1_DOMAIN",
            Self::L2Module => "L2_MODULE",
            Self::L3Code => "L3_CODE",
        }
    }

    /// Parse a storage tag exactly as written by [`MemoryLevel::as_str`].
    pub fn from_tag(tag: &str) -> Result<Self, MemoryError> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == tag)
            .ok_or_else(|| MemoryError::InvalidLevel(tag.to_string()))
    }
}

impl fmt::Display for MemoryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemoryLevel {
    type Err = MemoryError;

    /// Lenient form for user input: the storage tag in any case, plus the
    /// short `l0`..`l3` forms. Stored rows go through [`MemoryLevel::from_tag`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "L0_PROJECT" | "L0" => Ok(Self::L0Project),
            "L1_DOMAIN" | "L1" => Ok(Self::L1Domain),
            "L2_MODULE" | "L2" => Ok(Self::L2Module),
            "L3_CODE" | "L3" => Ok(Self::L3Code),
            _ => Err(MemoryError::InvalidLevel(s.to_string())),
        }
    }
}

/// A stored fact. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    /// Assigned by the store; increases with insertion order.
    pub id: i64,
    pub content: String,
    pub level: MemoryLevel,
    pub domain: String,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

/// Request to append a fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFact {
    pub content: String,
    pub level: MemoryLevel,
    pub domain: String,
    pub source: String,
}

impl NewFact {
    pub fn new(
        content: impl Into<String>,
        level: MemoryLevel,
        domain: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            level,
            domain: domain.into(),
            source: source.into(),
        }
    }
}

/// Filter for [`FactStore::query`](crate::FactStore::query). Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactFilter {
    pub level: Option<MemoryLevel>,
    pub domain: Option<String>,
    pub source: Option<String>,
    /// Substring the content must contain (case-sensitive).
    pub contains: Option<String>,
    pub limit: Option<usize>,
}

impl FactFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_level(mut self, level: MemoryLevel) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn with_contains(mut self, needle: impl Into<String>) -> Self {
        self.contains = Some(needle.into());
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

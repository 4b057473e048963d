use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Params, Row};

use crate::error::{MemoryError, Result};
use crate::models::{Fact, FactFilter, MemoryLevel, NewFact};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS facts (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        content    TEXT NOT NULL,
        level      TEXT NOT NULL,
        domain     TEXT NOT NULL,
        source     TEXT NOT NULL,
        created_at TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_facts_level ON facts(level);
    CREATE INDEX IF NOT EXISTS idx_facts_domain ON facts(domain);
";

const SELECT_FACTS: &str = "SELECT id, content, level, domain, source, created_at FROM facts";

/// SQLite companions that belong to a database file in WAL mode.
const SIDECAR_SUFFIXES: [&str; 2] = ["-wal", "-shm"];

/// Append-only fact store persisted in a single SQLite file.
///
/// One handle owns one connection. SQLite's file lock serializes appends
/// from several handles, and WAL mode lets readers see a consistent snapshot
/// while a writer is active.
pub struct FactStore {
    conn: Connection,
    path: PathBuf,
}

impl FactStore {
    /// Open the store at `path`, creating the file, its parent directories
    /// and the schema as needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| MemoryError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;
        conn.execute_batch(SCHEMA)?;

        tracing::debug!(path = %path.display(), "fact store opened");

        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Discard any store at `path` and open an empty one.
    ///
    /// Safe to call when nothing exists at `path` and safe to repeat.
    pub fn reset(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        remove_if_exists(path)?;
        for suffix in SIDECAR_SUFFIXES {
            remove_if_exists(&sidecar_path(path, suffix))?;
        }

        tracing::info!(path = %path.display(), "fact store reset");
        Self::open(path)
    }

    /// Location of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a fact and return it as stored.
    ///
    /// No uniqueness is enforced; identical content may be stored twice.
    pub fn add_fact(&self, fact: NewFact) -> Result<Fact> {
        let created_at = Utc::now();

        self.conn.execute(
            "INSERT INTO facts (content, level, domain, source, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                fact.content,
                fact.level.as_str(),
                fact.domain,
                fact.source,
                created_at
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        tracing::trace!(id, level = %fact.level, domain = %fact.domain, "fact added");

        Ok(Fact {
            id,
            content: fact.content,
            level: fact.level,
            domain: fact.domain,
            source: fact.source,
            created_at,
        })
    }

    /// Every fact, in insertion order.
    pub fn get_all_facts(&self) -> Result<Vec<Fact>> {
        self.select(&format!("{SELECT_FACTS} ORDER BY id"), [])
    }

    /// Facts at one level, in insertion order.
    pub fn get_facts_by_level(&self, level: MemoryLevel) -> Result<Vec<Fact>> {
        self.select(
            &format!("{SELECT_FACTS} WHERE level = ?1 ORDER BY id"),
            [level.as_str()],
        )
    }

    /// Facts in one domain, in insertion order.
    pub fn get_facts_by_domain(&self, domain: &str) -> Result<Vec<Fact>> {
        self.select(
            &format!("{SELECT_FACTS} WHERE domain = ?1 ORDER BY id"),
            [domain],
        )
    }

    /// Facts matching every set field of `filter`, in insertion order.
    pub fn query(&self, filter: &FactFilter) -> Result<Vec<Fact>> {
        let mut conditions: Vec<&str> = Vec::new();
        let mut values: Vec<String> = Vec::new();

        if let Some(level) = filter.level {
            conditions.push("level = ?");
            values.push(level.as_str().to_string());
        }
        if let Some(domain) = &filter.domain {
            conditions.push("domain = ?");
            values.push(domain.clone());
        }
        if let Some(source) = &filter.source {
            conditions.push("source = ?");
            values.push(source.clone());
        }
        if let Some(needle) = &filter.contains {
            conditions.push("instr(content, ?) > 0");
            values.push(needle.clone());
        }

        let mut sql = SELECT_FACTS.to_string();
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY id");
        if let Some(limit) = filter.limit {
            // SQLite limits are signed 64-bit.
            let limit = i64::try_from(limit).unwrap_or(i64::MAX);
            sql.push_str(&format!(" LIMIT {limit}"));
        }

        self.select(&sql, params_from_iter(values))
    }

    /// Look up one fact by id.
    pub fn get_fact(&self, id: i64) -> Result<Option<Fact>> {
        let row = self
            .conn
            .query_row(&format!("{SELECT_FACTS} WHERE id = ?1"), [id], FactRow::read)
            .optional()?;

        row.map(FactRow::into_fact).transpose()
    }

    /// Number of stored facts.
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM facts", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    /// Close the connection, reporting any error SQLite raises while doing so.
    pub fn close(self) -> Result<()> {
        let path = self.path;
        self.conn.close().map_err(|(_, e)| MemoryError::from(e))?;
        tracing::debug!(path = %path.display(), "fact store closed");
        Ok(())
    }

    fn select(&self, sql: &str, params: impl Params) -> Result<Vec<Fact>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, FactRow::read)?;
        let facts = rows
            .map(|row| row.map_err(MemoryError::from).and_then(FactRow::into_fact))
            .collect::<Result<Vec<_>>>()?;
        Ok(facts)
    }
}

/// Raw column values; the level tag is validated in `into_fact`.
struct FactRow {
    id: i64,
    content: String,
    level: String,
    domain: String,
    source: String,
    created_at: DateTime<Utc>,
}

impl FactRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            content: row.get(1)?,
            level: row.get(2)?,
            domain: row.get(3)?,
            source: row.get(4)?,
            created_at: row.get(5)?,
        })
    }

    fn into_fact(self) -> Result<Fact> {
        Ok(Fact {
            id: self.id,
            content: self.content,
            level: MemoryLevel::from_tag(&self.level)?,
            domain: self.domain,
            source: self.source,
            created_at: self.created_at,
        })
    }
}

fn sidecar_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

fn remove_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(MemoryError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

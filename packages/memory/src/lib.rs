//! Statute Memory - Durable hierarchical fact store.
//!
//! Facts are short classified text records (for example an article title and
//! the start of its text) tagged with a [`MemoryLevel`], a domain label and a
//! provenance label. They are appended to a SQLite file and survive process
//! restarts.
//!
//! # Example
//!
//! ```
//! use statute_memory::{FactStore, MemoryLevel, NewFact};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let store = FactStore::reset(dir.path().join("facts.db")).unwrap();
//!
//! store
//!     .add_fact(NewFact::new(
//!         "Статья 1\n...",
//!         MemoryLevel::L1Domain,
//!         "44-fz-structure",
//!         "xml_parser",
//!     ))
//!     .unwrap();
//!
//! assert_eq!(store.get_all_facts().unwrap().len(), 1);
//! ```

pub mod error;
pub mod models;
pub mod store;

pub use error::{MemoryError, Result};
pub use models::{Fact, FactFilter, MemoryLevel, NewFact};
pub use store::FactStore;

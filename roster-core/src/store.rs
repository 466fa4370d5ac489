//! Persistence of the schedule document.
//!
//! The document lives as a single JSON value under a fixed key in a key-value
//! storage. Reading never fails from the caller's point of view: a missing or
//! unusable value is replaced by the built-in default. Writing can fail, in which
//! case the in-memory document still changes and the caller gets a notice.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::document::ScheduleDocument;
use crate::error::{RosterError, RosterResult};

/// Storage key of the schedule document.
pub const STORAGE_KEY: &str = "rosterMate:v1";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> RosterResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> RosterResult<()>;
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        self.dir.join(format!("{}.json", file_stem))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> RosterResult<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> RosterResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// Storage kept in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    reject_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, as with an exhausted quota.
    pub fn read_only() -> Self {
        MemoryStore {
            entries: HashMap::new(),
            reject_writes: true,
        }
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> RosterResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> RosterResult<()> {
        if self.reject_writes {
            return Err(RosterError::Storage("storage is read-only".into()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Result of writing the document to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    Persisted,
    /// Kept in memory for this session only.
    NotPersisted(String),
}

impl SaveStatus {
    pub fn is_persisted(&self) -> bool {
        matches!(self, SaveStatus::Persisted)
    }

    /// Message for the user when the write did not go through.
    pub fn notice(&self) -> Option<String> {
        match self {
            SaveStatus::Persisted => None,
            SaveStatus::NotPersisted(reason) => {
                Some(format!("Changes are kept for this session only: {}", reason))
            }
        }
    }
}

/// Where the document held by a store came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOrigin {
    Stored,
    /// Synthesised on load, with the outcome of persisting it.
    Default(SaveStatus),
}

pub struct ScheduleStore {
    storage: Box<dyn KeyValueStore>,
    key: String,
    document: ScheduleDocument,
    origin: DocumentOrigin,
}

impl ScheduleStore {
    /// Read the document under `key`, falling back to (and persisting) the
    /// default document anchored on the week of `today`.
    pub fn load(mut storage: Box<dyn KeyValueStore>, key: &str, today: NaiveDate) -> Self {
        if let Some(document) = read_document(&*storage, key) {
            debug!(key, anchor = %document.anchor, "loaded stored schedule");
            return ScheduleStore {
                storage,
                key: key.to_string(),
                document,
                origin: DocumentOrigin::Stored,
            };
        }

        let document = ScheduleDocument::default_for(today);
        let status = write_document(&mut *storage, key, &document);
        debug!(key, anchor = %document.anchor, "created default schedule");

        ScheduleStore {
            storage,
            key: key.to_string(),
            document,
            origin: DocumentOrigin::Default(status),
        }
    }

    pub fn document(&self) -> &ScheduleDocument {
        &self.document
    }

    pub fn origin(&self) -> &DocumentOrigin {
        &self.origin
    }

    /// Replace the whole document and persist it.
    pub fn save(&mut self, document: ScheduleDocument) -> SaveStatus {
        let status = write_document(&mut *self.storage, &self.key, &document);
        self.document = document;
        status
    }
}

fn read_document(storage: &dyn KeyValueStore, key: &str) -> Option<ScheduleDocument> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "could not read stored schedule, using default");
            return None;
        }
    };

    match ScheduleDocument::from_json(&raw) {
        Ok(document) => Some(document),
        Err(e) => {
            warn!(key, error = %e, "stored schedule is unusable, using default");
            None
        }
    }
}

fn write_document(storage: &mut dyn KeyValueStore, key: &str, document: &ScheduleDocument) -> SaveStatus {
    let result = document
        .to_json()
        .and_then(|json| storage.set(key, &json));

    match result {
        Ok(()) => {
            debug!(key, "saved schedule");
            SaveStatus::Persisted
        }
        Err(e) => {
            warn!(key, error = %e, "could not save schedule");
            SaveStatus::NotPersisted(e.to_string())
        }
    }
}

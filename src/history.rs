//! Recently generated text payloads.
//!
//! The list is most-recent-first, free of duplicates and capped at
//! [`HISTORY_CAPACITY`]. [`History`] enforces those rules; stores only persist
//! whatever sequence they are given.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::error::Result;

/// Maximum number of remembered entries
pub const HISTORY_CAPACITY: usize = 5;

/// Characters kept by [`entry_label`] before truncating
pub const LABEL_LENGTH: usize = 20;

/// Persistence backend for the history list
pub trait HistoryStore: Send + Sync {
    /// Read the stored sequence; an absent store reads as empty
    fn load(&self) -> Result<Vec<String>>;
    /// Replace the stored sequence
    fn save(&self, entries: &[String]) -> Result<()>;
    /// Remove everything
    fn clear(&self) -> Result<()>;
}

/// Process-local store, mostly for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    entries: Mutex<Vec<String>>,
}

impl MemoryHistoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with raw entries
    pub fn with_entries(entries: Vec<String>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        // every write replaces the Vec wholesale, so a poisoned value is still whole
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self) -> Result<Vec<String>> {
        Ok(self.lock().clone())
    }

    fn save(&self, entries: &[String]) -> Result<()> {
        *self.lock() = entries.to_vec();
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.lock().clear();
        Ok(())
    }
}

/// JSON array of strings on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by `path`; the file is created on first save
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&self) -> Result<Vec<String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self, entries: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string(entries)?)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}

/// Capped, deduplicated, most-recent-first list over a store
pub struct History {
    entries: Vec<String>,
    store: Box<dyn HistoryStore>,
}

impl History {
    /// Load from `store`, repairing duplicates or overflow left by other writers
    pub fn open(store: impl HistoryStore + 'static) -> Result<Self> {
        let raw = store.load()?;
        let entries = normalize(raw.clone());
        if entries != raw {
            log::warn!(
                "history store held {} entries, kept {} after dedupe/cap",
                raw.len(),
                entries.len()
            );
        }
        Ok(Self {
            entries,
            store: Box::new(store),
        })
    }

    /// Entries, most recent first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is remembered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Move `value` to the front (inserting it if new), evict past the cap, persist.
    ///
    /// The in-memory list only changes once the store accepted the new sequence.
    pub fn record(&mut self, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        let older = self.entries.iter().filter(|existing| **existing != value).cloned();
        let next: Vec<String> = std::iter::once(value.clone())
            .chain(older)
            .take(HISTORY_CAPACITY)
            .collect();
        self.store.save(&next)?;
        self.entries = next;
        Ok(())
    }

    /// Forget everything, in memory and in the store
    pub fn clear(&mut self) -> Result<()> {
        self.store.clear()?;
        self.entries.clear();
        Ok(())
    }
}

impl std::fmt::Debug for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("History")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

/// Short label for a history entry: the first 20 characters, then `…`
pub fn entry_label(value: &str) -> String {
    if value.chars().count() <= LABEL_LENGTH {
        return value.to_string();
    }
    let mut label: String = value.chars().take(LABEL_LENGTH).collect();
    label.push('…');
    label
}

fn normalize(raw: Vec<String>) -> Vec<String> {
    let mut entries: Vec<String> = Vec::with_capacity(HISTORY_CAPACITY);
    for value in raw {
        if entries.len() == HISTORY_CAPACITY {
            break;
        }
        if !entries.contains(&value) {
            entries.push(value);
        }
    }
    entries
}

//! Habit persistence with file locking.
//!
//! All records live in one JSON document, read under a shared lock and
//! replaced atomically (temp file, fsync, rename) under an exclusive lock.
//! A missing file is an empty store; a malformed file is an error — the
//! store never substitutes defaults for records it cannot parse.

use crate::{Error, HabitRecord, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// File name of the habit store inside the data directory
pub const STORE_FILE: &str = "habits.json";

/// All tracked habits, keyed by their unique name
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct HabitStore {
    habits: BTreeMap<String, HabitRecord>,
}

impl HabitStore {
    /// Load the store from a file with shared locking
    ///
    /// A missing file yields an empty store (nothing tracked yet). A file
    /// that cannot be read or parsed is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No habit store found at {:?}, starting empty", path);
            return Ok(Self::default());
        }

        let file = File::open(path)?;
        file.lock_shared()?;

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        let read_result = reader.read_to_string(&mut contents);
        file.unlock()?;
        read_result?;

        let mut store: HabitStore = serde_json::from_str(&contents)
            .map_err(|e| Error::Store(format!("malformed habit store {:?}: {}", path, e)))?;

        // Uphold the ledger invariant even for hand-edited files
        for record in store.habits.values_mut() {
            record.canonicalize_ledger();
        }

        tracing::debug!("Loaded {} habits from {:?}", store.habits.len(), path);
        Ok(store)
    }

    /// Save the store to a file with exclusive locking
    ///
    /// Atomically writes by:
    /// 1. Writing to a temp file in the same directory
    /// 2. Syncing to disk
    /// 3. Renaming over the original
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let temp = NamedTempFile::new_in(path.parent().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "store path missing parent")
        })?)?;

        // Exclusive lock on the temp file serializes concurrent writers
        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let contents = serde_json::to_string(self)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved {} habits to {:?}", self.habits.len(), path);
        Ok(())
    }

    /// Load the store, modify it, and save it back atomically
    pub fn update<F>(path: &Path, f: F) -> Result<Self>
    where
        F: FnOnce(&mut HabitStore) -> Result<()>,
    {
        let mut store = Self::load(path)?;
        f(&mut store)?;
        store.save(path)?;
        Ok(store)
    }

    /// Insert a new record; refuses to clobber an existing habit
    ///
    /// Returns false and leaves the store unchanged if the name is taken.
    pub fn add(&mut self, record: HabitRecord) -> bool {
        if self.habits.contains_key(&record.name) {
            return false;
        }
        self.habits.insert(record.name.clone(), record);
        true
    }

    pub fn get(&self, name: &str) -> Option<&HabitRecord> {
        self.habits.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut HabitRecord> {
        self.habits.get_mut(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<HabitRecord> {
        self.habits.remove(name)
    }

    /// All records, in name order
    pub fn records(&self) -> impl Iterator<Item = &HabitRecord> {
        self.habits.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.habits.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }
}

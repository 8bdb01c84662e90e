//! Durable key-value storage.
//!
//! This module provides the storage backends behind persistence:
//! - `Storage` trait: get/set of a single blob per key
//! - `FileStore`: one JSON file per key inside a data directory
//! - `MemoryStore`: in-memory map, behind the default state and in tests
//! - `ItemPersistence`: save/restore of the item sequence on top of a store

mod error;
mod persistence;

pub use error::StorageError;
pub use persistence::{decode, encode, ItemPersistence, ITEMS_KEY};

use log::*;
use std::{
    cell::RefCell,
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    rc::Rc,
};

const DEFAULT_DIRECTORY_NAME: &str = "todo-tui";
const FILE_EXTENSION: &str = "json";

/// A blob store addressed by key.
///
pub trait Storage {
    /// Return the blob stored under `key`, or `None` if nothing was stored.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the blob stored under `key`.
    fn set(&mut self, key: &str, blob: &str) -> Result<(), StorageError>;
}

/// Stores each key as `<dir>/<key>.json`.
///
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    /// Return a store rooted at the platform data directory.
    ///
    pub fn at_default_path() -> Result<Self, StorageError> {
        Ok(FileStore::new(FileStore::default_path()?))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path of the file holding `key`.
    ///
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", key, FILE_EXTENSION))
    }

    fn default_path() -> Result<PathBuf, StorageError> {
        match dirs::data_dir() {
            Some(data) => Ok(data.join(DEFAULT_DIRECTORY_NAME)),
            None => Err(StorageError::DataDirectoryNotFound),
        }
    }
}

impl Storage for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StorageError::ReadFailed { path, source: e })
    }

    fn set(&mut self, key: &str, blob: &str) -> Result<(), StorageError> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|e| StorageError::CreateDirectoryFailed {
                path: self.dir.clone(),
                source: e,
            })?;
        }

        // Write beside the target and rename so a crash never leaves half a file
        let path = self.path_for(key);
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, blob).map_err(|e| StorageError::WriteFailed {
            path: tmp_path.clone(),
            source: e,
        })?;
        fs::rename(&tmp_path, &path).map_err(|e| StorageError::WriteFailed {
            path: path.clone(),
            source: e,
        })?;
        trace!("Wrote {} bytes to {}", blob.len(), path.display());
        Ok(())
    }
}

/// In-memory store. Clones share the same underlying map.
///
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Return a store that already holds `blob` under `key`.
    ///
    pub fn with_entry(key: &str, blob: &str) -> Self {
        let store = MemoryStore::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        store
    }
}

impl Storage for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, blob: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("todo-tui-test-{}", Uuid::new_v4()))
    }

    #[test]
    fn memory_store_get_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("todos").unwrap(), None);
    }

    #[test]
    fn memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let mut writer = store.clone();
        writer.set("todos", "[]").unwrap();
        assert_eq!(store.get("todos").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn file_store_missing_file_is_none() {
        let store = FileStore::new(scratch_dir());
        assert_eq!(store.get("todos").unwrap(), None);
    }

    #[test]
    fn file_store_creates_directory_and_overwrites() {
        let dir = scratch_dir();
        let mut store = FileStore::new(&dir);
        store.set("todos", "[1]").unwrap();
        store.set("todos", "[2]").unwrap();
        assert_eq!(store.get("todos").unwrap().as_deref(), Some("[2]"));
        assert!(store.path_for("todos").ends_with("todos.json"));
        assert!(!store.path_for("todos").with_extension("tmp").exists());
        fs::remove_dir_all(&dir).unwrap();
    }
}

use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::Write as _,
    path::PathBuf,
    sync::{Mutex, RwLock},
};

use fractic_server_error::ServerError;

use crate::errors::{InvalidRon, ReadError, StorageUnavailable, WriteError};

/// Durable string key-value storage for client state (the browser's
/// `localStorage`, as far as this crate is concerned).
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, ServerError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), ServerError>;
    fn remove_item(&self, key: &str) -> Result<(), ServerError>;
}

// In-memory.
// ---

/// Storage that lives as long as the process.
#[derive(Default)]
pub struct MemoryStorage {
    items: RwLock<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ServerError> {
        let items = self
            .items
            .read()
            .map_err(|e| StorageUnavailable::with_debug("memory storage lock poisoned", &e))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ServerError> {
        let mut items = self
            .items
            .write()
            .map_err(|e| StorageUnavailable::with_debug("memory storage lock poisoned", &e))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), ServerError> {
        let mut items = self
            .items
            .write()
            .map_err(|e| StorageUnavailable::with_debug("memory storage lock poisoned", &e))?;
        items.remove(key);
        Ok(())
    }
}

// File-backed.
// ---

/// Storage persisted as a single RON map. Every write replaces the file
/// through a temporary sibling and a rename, so readers never observe a
/// half-written file.
pub struct FileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn load(&self) -> Result<BTreeMap<String, String>, ServerError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| ReadError::with_debug(&e))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        ron::from_str(&content).map_err(|e| InvalidRon::with_debug("client storage", &e))
    }

    fn save(&self, items: &BTreeMap<String, String>) -> Result<(), ServerError> {
        let path_str = self.path.to_string_lossy().to_string();
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| WriteError::with_debug(&path_str, &e))?;
            }
        }

        let content = ron::ser::to_string_pretty(items, ron::ser::PrettyConfig::default())
            .map_err(|e| WriteError::with_debug(&path_str, &e))?;

        let tmp_path = self.path.with_extension("ron.tmp");
        let mut tmp_file =
            File::create(&tmp_path).map_err(|e| WriteError::with_debug(&path_str, &e))?;
        tmp_file
            .write_all(content.as_bytes())
            .and_then(|_| tmp_file.sync_all())
            .map_err(|e| WriteError::with_debug(&path_str, &e))?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path).map_err(|e| WriteError::with_debug(&path_str, &e))
    }

    fn update<F>(&self, f: F) -> Result<(), ServerError>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| StorageUnavailable::with_debug("file storage lock poisoned", &e))?;
        let mut items = self.load()?;
        f(&mut items);
        self.save(&items)
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ServerError> {
        Ok(self.load()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ServerError> {
        self.update(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), ServerError> {
        self.update(|items| {
            items.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_storage_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state").join("client.ron");

        let storage = FileStorage::new(&path);
        storage.set_item("token", "abc").unwrap();
        storage.set_item("permissions", r#"["voucher:edit"]"#).unwrap();
        storage.remove_item("permissions").unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get_item("token").unwrap().as_deref(), Some("abc"));
        assert_eq!(reopened.get_item("permissions").unwrap(), None);
        assert!(!path.with_extension("ron.tmp").exists());
    }

    #[test]
    fn test_file_storage_rejects_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("client.ron");
        fs::write(&path, "not ron {").unwrap();

        assert!(FileStorage::new(&path).get_item("token").is_err());
    }

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("token").unwrap(), None);
        storage.set_item("token", "abc").unwrap();
        assert_eq!(storage.get_item("token").unwrap().as_deref(), Some("abc"));
        storage.remove_item("token").unwrap();
        assert_eq!(storage.get_item("token").unwrap(), None);
    }
}

//! File-backed `KeyValueStore`.
//!
//! The whole map lives in one JSON object file. Writes go to a uniquely named
//! temporary file in the same directory that is then renamed over the
//! original, so a crash never leaves a half-written store behind.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use tempfile::NamedTempFile;

use super::traits::KeyValueStore;
use crate::error::{GsspError, Result};

type Entries = BTreeMap<String, String>;

/// One lock per store file, shared by every `FileStore` opened on it in this
/// process. Other processes are not coordinated.
fn path_lock(path: &Path) -> Arc<Mutex<()>> {
    static LOCKS: OnceLock<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> = OnceLock::new();
    let key = match (fs::canonicalize(parent_dir(path)), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    };
    Arc::clone(LOCKS.get_or_init(Default::default).lock().entry(key).or_default())
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles on this file within this process.
    lock: Arc<Mutex<()>>,
}

impl FileStore {
    /// Open a store at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let lock = path_lock(&path);
        Self { path, lock }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Entries> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok(Entries::new()),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                GsspError::Storage(format!("corrupt store {}: {e}", self.path.display()))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, entries: &Entries) -> Result<()> {
        // Dropped, and so removed, if anything below fails.
        let mut tmp = NamedTempFile::new_in(parent_dir(&self.path))?;
        tmp.write_all(&serde_json::to_vec_pretty(entries)?)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| GsspError::Io(e.error))?;
        Ok(())
    }

    fn update(&self, f: impl FnOnce(&mut Entries)) -> Result<()> {
        let _guard = self.lock.lock();
        let mut entries = self.read()?;
        f(&mut entries);
        self.write(&entries)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock();
        Ok(self.read()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.update(|entries| {
            entries.remove(key);
        })
    }

    fn clear(&self) -> Result<()> {
        self.update(Entries::clear)
    }
}

//! File-backed slot storage.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use common::{AppError, AppResult};
use tracing::debug;

use super::slot::SlotStorage;

/// Extension of every slot file
const SLOT_EXTENSION: &str = "json";

/// Stores each slot as `<dir>/<key>.json`.
///
/// ```text
/// data-dir/
/// └── users.json        → slot "users"
/// ```
///
/// Writes land in a temporary sibling first and are renamed into place, so
/// a crash mid-write leaves the previous content intact.
#[derive(Debug, Clone)]
pub struct FileSlotStorage {
    dir: PathBuf,
}

impl FileSlotStorage {
    /// Create storage rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing a slot
    pub fn slot_path(&self, key: &str) -> AppResult<PathBuf> {
        if key.is_empty()
            || key.starts_with('.')
            || key.contains(|c: char| c == '/' || c == '\\')
        {
            return Err(AppError::storage(format!("invalid slot key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.{}", key, SLOT_EXTENSION)))
    }
}

impl SlotStorage for FileSlotStorage {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!("Read slot {:?} ({} bytes)", path, content.len());
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Slot {:?} does not exist", path);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.slot_path(key)?;
        fs::create_dir_all(&self.dir)?;

        let tmp = path.with_extension(format!("{}.tmp", SLOT_EXTENSION));
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &path)?;

        debug!("Wrote slot {:?} ({} bytes)", path, value.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_slot_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSlotStorage::new(dir.path());

        assert_eq!(storage.read("users").unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSlotStorage::new(dir.path().join("nested"));

        storage.write("users", "[]").unwrap();
        assert_eq!(storage.read("users").unwrap().as_deref(), Some("[]"));

        storage.write("users", r#"[{"a":1}]"#).unwrap();
        assert_eq!(storage.read("users").unwrap().as_deref(), Some(r#"[{"a":1}]"#));
        assert!(dir.path().join("nested/users.json").is_file());
        assert!(!dir.path().join("nested/users.json.tmp").exists());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let storage = FileSlotStorage::new("/tmp/unused");

        for key in ["", "../users", "a/b", ".hidden"] {
            assert!(storage.slot_path(key).is_err(), "{key:?} should be rejected");
        }
    }
}

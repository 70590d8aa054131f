use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;

use super::{valid_key, KeyValueStore, StoreError};

const TMP_SUFFIX: &str = "tmp";

/// Store keeping one file per key inside a profile directory. Each directory
/// is an independent storage scope.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn open(root: impl Into<PathBuf>) -> Result<FileStore, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;

        Ok(FileStore { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        if !valid_key(key) {
            return None;
        }

        match fs::read_to_string(self.entry_path(key)) {
            Ok(value) => Some(value),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                debug!("failed to read store entry, key={}, err={}", key, err);
                None
            },
        }
    }

    /// Writes to a sibling temporary file first and renames it over the
    /// entry, so a crash never leaves a half written value behind.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if !valid_key(key) {
            return Err(StoreError::InvalidKey(key.to_string()));
        }

        let path = self.entry_path(key);
        let tmp_path = path.with_extension(TMP_SUFFIX);

        let mut file = File::create(&tmp_path)?;
        file.write_all(value.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp_path, &path)?;

        Ok(())
    }
}

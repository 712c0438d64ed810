//! File-backed [`LocalStorage`].

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tutorhub_app::ports::LocalStorage;
use tutorhub_domain::error::TutorHubError;

use crate::error::StorageError;

type Items = BTreeMap<String, String>;

/// Keyed string storage persisted as one JSON object.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
    items: Mutex<Items>,
}

impl JsonFileStorage {
    /// Open the storage file at `path`, starting empty when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when the file exists but cannot be read,
    /// or [`StorageError::Corrupt`] when it is not a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let items = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| StorageError::Corrupt {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == ErrorKind::NotFound => Items::new(),
            Err(source) => {
                return Err(StorageError::Io {
                    path: path.clone(),
                    source,
                });
            }
        };
        tracing::debug!(path = %path.display(), keys = items.len(), "storage opened");
        Ok(Self {
            path,
            items: Mutex::new(items),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, Items> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, items: &Items) -> Result<(), StorageError> {
        let io_error = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let json = serde_json::to_vec_pretty(items).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(io_error)?;
        fs::rename(&tmp, &self.path).map_err(io_error)?;
        Ok(())
    }

    fn update(&self, change: impl FnOnce(&mut Items)) -> Result<(), TutorHubError> {
        let mut items = self.lock();
        let mut next = items.clone();
        change(&mut next);
        if next == *items {
            return Ok(());
        }
        self.persist(&next).inspect_err(|err| {
            tracing::error!(error = %err, "unable to persist storage");
        })?;
        *items = next;
        Ok(())
    }
}

impl LocalStorage for JsonFileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, TutorHubError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), TutorHubError> {
        self.update(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), TutorHubError> {
        self.update(|items| {
            items.remove(key);
        })
    }
}

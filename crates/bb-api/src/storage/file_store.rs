//! JSON-file backed key-value store.
//!
//! The whole map is rewritten on every batch through a temp file and a
//! rename, so readers see either the old pair or the new pair.

use crate::{ApiError, ApiResult, KeyValueStore};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::warn;

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> ApiResult<BTreeMap<String, String>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(ApiError::storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        match serde_json::from_str(&contents) {
            Ok(map) => Ok(map),
            Err(e) => {
                warn!(
                    "Ignoring unreadable session file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> ApiResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            std::fs::create_dir_all(dir).map_err(|e| {
                ApiError::storage(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }

        let contents = serde_json::to_string_pretty(map)?;
        let tmp_path = self.path.with_extension("json.tmp");

        std::fs::write(&tmp_path, contents).map_err(|e| {
            ApiError::storage(format!("Failed to write {}: {}", tmp_path.display(), e))
        })?;
        restrict_permissions(&tmp_path);

        std::fs::rename(&tmp_path, &self.path).map_err(|e| {
            ApiError::storage(format!(
                "Failed to replace {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> ApiResult<Option<String>> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn write_batch(&self, batch: &[(&str, Option<String>)]) -> ApiResult<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| ApiError::storage("session file lock poisoned"))?;

        let mut map = self.read_map()?;
        for (key, value) in batch {
            match value {
                Some(value) => map.insert(key.to_string(), value.clone()),
                None => map.remove(*key),
            };
        }
        self.write_map(&map)
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Err(e) = std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)) {
        warn!("Could not restrict permissions on {}: {}", path.display(), e);
    }
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) {}

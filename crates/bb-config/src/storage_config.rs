use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_FILE};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Persisted credentials file, relative to the config directory
    pub session_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_file: String::from(DEFAULT_SESSION_FILE),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let path = std::path::Path::new(&self.session_file);
        if self.session_file.is_empty() || path.is_absolute() || self.session_file.contains("..")
        {
            return Err(ConfigError::storage(
                "storage.session_file must be a relative path and cannot contain '..'",
            ));
        }
        Ok(())
    }
}

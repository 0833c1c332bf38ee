use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_APP_TITLE, DEFAULT_PAGE_SIZE,
    DEFAULT_REFRESH_INTERVAL_SECS, DEFAULT_SEARCH_DEBOUNCE_MS, MIN_REFRESH_INTERVAL_SECS,
    PAGE_SIZE_OPTIONS,
};

use std::time::Duration;

use serde::Deserialize;

/// Behaviour of the list and dashboard views
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub app_title: String,
    pub default_page_size: u32,
    /// Quiet period before typed search text becomes a filter
    pub search_debounce_ms: u64,
    /// Auto-refresh interval of the dashboard view
    pub refresh_interval_secs: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            app_title: String::from(DEFAULT_APP_TITLE),
            default_page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
        }
    }
}

impl DashboardConfig {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !PAGE_SIZE_OPTIONS.contains(&self.default_page_size) {
            return Err(ConfigError::dashboard(format!(
                "dashboard.default_page_size must be one of {:?}, got {}",
                PAGE_SIZE_OPTIONS, self.default_page_size
            )));
        }

        if self.search_debounce_ms == 0 {
            return Err(ConfigError::dashboard(
                "dashboard.search_debounce_ms must be greater than 0",
            ));
        }

        if self.refresh_interval_secs < MIN_REFRESH_INTERVAL_SECS {
            return Err(ConfigError::dashboard(format!(
                "dashboard.refresh_interval_secs must be >= {}, got {}",
                MIN_REFRESH_INTERVAL_SECS, self.refresh_interval_secs
            )));
        }

        Ok(())
    }
}

mod api_config;
mod config;
mod dashboard_config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use dashboard_config::DashboardConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "BB_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".billbharat";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
const MIN_API_TIMEOUT_SECS: u64 = 1;
const MAX_API_TIMEOUT_SECS: u64 = 300;

const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_APP_TITLE: &str = "BillBharat Owner Dashboard";
const DEFAULT_PAGE_SIZE: u32 = 25;
const PAGE_SIZE_OPTIONS: [u32; 3] = [25, 50, 100];
const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;
const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 5 * 60;
const MIN_REFRESH_INTERVAL_SECS: u64 = 10;

const DEFAULT_SESSION_FILE: &str = "session.json";

use crate::ApiResult;

/// Durable string key-value storage for the session credentials
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> ApiResult<Option<String>>;

    /// Apply every entry in a single write; `None` removes the key.
    fn write_batch(&self, entries: &[(&str, Option<String>)]) -> ApiResult<()>;
}

pub(crate) mod credential_store;
pub(crate) mod file_store;
pub(crate) mod key_value_store;
pub(crate) mod memory_store;

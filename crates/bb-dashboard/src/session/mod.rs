pub(crate) mod session_state;
pub(crate) mod session_store;

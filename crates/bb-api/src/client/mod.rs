pub(crate) mod endpoint;
pub(crate) mod http_client;

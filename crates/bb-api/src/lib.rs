//! bb-api
//!
//! Authenticated HTTP access to the BillBharat billing API: the transport
//! wrapper, the persisted credential pair, and one service per API area.

pub mod api;
pub mod auth_event;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod services;
pub mod storage;

#[cfg(test)]
mod tests;

pub use api::Api;
pub use auth_event::AuthEvent;
pub use client::endpoint::{BestEffort, Required};
pub use client::http_client::HttpClient;
pub use error::{ApiError, Result as ApiResult};
pub use services::auth::AuthService;
pub use services::customer::CustomerService;
pub use services::item::ItemService;
pub use services::payment::{CreateOrderRequest, PaymentService, VerifyPaymentRequest};
pub use services::report::{DEFAULT_GROWTH_DAYS, DEFAULT_TREND_MONTHS, ReportService};
pub use services::sales::SalesService;
pub use services::subscription::SubscriptionService;
pub use services::user::UserService;
pub use storage::credential_store::{CredentialStore, TOKEN_KEY, USER_KEY};
pub use storage::file_store::FileStore;
pub use storage::key_value_store::KeyValueStore;
pub use storage::memory_store::MemoryStore;

/// Message every call fails with when no response reached the client
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";

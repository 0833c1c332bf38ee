pub mod csv_export;
pub mod envelope;
pub mod error;
pub mod filters;
pub mod format;
pub mod models;

#[cfg(test)]
mod tests;

pub use csv_export::{CsvRecord, to_csv, write_csv};
pub use envelope::{Envelope, Page};
pub use error::{CoreError, Result as CoreResult};
pub use filters::{CustomerFilters, PageRequest, QueryParams, SalesFilters, SubscriptionFilters};
pub use models::business_type::BusinessType;
pub use models::customer::Customer;
pub use models::plan::Plan;
pub use models::reports::{
    ChartData, CustomerGrowthData, DashboardKpis, PlanDistribution, RevenueReport,
};
pub use models::role::{ALLOWED_ROLES, Role};
pub use models::sales_performance::SalesPerformance;
pub use models::subscription::Subscription;
pub use models::subscription_status::SubscriptionStatus;
pub use models::user::{LoginCredentials, User};

/// Page size used by list views until the user picks another one
pub const DEFAULT_PAGE_SIZE: u32 = 25;
/// Page sizes the list views offer
pub const PAGE_SIZE_OPTIONS: [u32; 3] = [25, 50, 100];

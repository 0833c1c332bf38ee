pub mod business_type;
pub mod customer;
pub mod plan;
pub mod reports;
pub mod role;
pub mod sales_performance;
pub mod subscription;
pub mod subscription_status;
pub mod user;

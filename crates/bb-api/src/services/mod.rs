pub(crate) mod auth;
pub(crate) mod customer;
pub(crate) mod item;
pub(crate) mod payment;
pub(crate) mod report;
pub(crate) mod sales;
pub(crate) mod subscription;
pub(crate) mod user;

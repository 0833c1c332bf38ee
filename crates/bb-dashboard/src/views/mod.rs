pub(crate) mod customers;
pub(crate) mod dashboard;
pub(crate) mod list_page;
pub(crate) mod login;
pub(crate) mod reports;
pub(crate) mod sales;
pub(crate) mod settings;
pub(crate) mod subscriptions;
pub(crate) mod view_state;

//! Paths of the billing API, relative to the configured base URL.

pub const AUTH_LOGIN: &str = "/api/auth/login";
pub const AUTH_LOGOUT: &str = "/api/auth/logout";
pub const AUTH_CHANGE_PASSWORD: &str = "/api/auth/change-password";

pub const CUSTOMERS: &str = "/api/customers";
pub const CUSTOMERS_EXPORT: &str = "/api/customers/export";
pub const CUSTOMER_CITIES: &str = "/api/customers/cities";
pub const CUSTOMER_TALUKAS: &str = "/api/customers/talukas";

pub const SUBSCRIPTIONS: &str = "/api/subscriptions";
pub const SUBSCRIPTIONS_EXPORT: &str = "/api/subscriptions/export";
pub const PLANS: &str = "/api/plans";

pub const SALES_PERFORMANCE: &str = "/api/sales/performance";
pub const SALES_EXPORT: &str = "/api/sales/export";
pub const BILLS: &str = "/api/bills";
pub const BILLS_DATE_RANGE: &str = "/api/bills/date-range";

pub const REPORTS_DASHBOARD_KPIS: &str = "/api/reports/dashboard-kpis";
pub const REPORTS_CUSTOMER_GROWTH: &str = "/api/reports/customer-growth";
pub const REPORTS_REVENUE: &str = "/api/reports/revenue";
pub const REPORTS_PLAN_DISTRIBUTION: &str = "/api/reports/plan-distribution";
pub const REPORTS_SUBSCRIPTION_DISTRIBUTION: &str = "/api/reports/subscription-distribution";
pub const REPORTS_BUSINESS_TYPE_DISTRIBUTION: &str = "/api/reports/business-type-distribution";
pub const REPORTS_REVENUE_TREND: &str = "/api/reports/revenue-trend";

pub const PAYMENTS_CREATE_ORDER: &str = "/api/payments/create-order";
pub const PAYMENTS_VERIFY: &str = "/api/payments/verify";

pub const ITEMS: &str = "/api/items";
pub const ITEMS_LOW_STOCK: &str = "/api/items/low-stock";
pub const ITEMS_FAST_MOVING: &str = "/api/items/fast-items";

pub const USER_ELIGIBILITY: &str = "/api/user/eligibility";

/// Ids go into the path as one percent-encoded segment
fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

pub fn customer(id: &str) -> String {
    format!("{}/{}", CUSTOMERS, segment(id))
}

pub fn subscription(id: &str) -> String {
    format!("{}/{}", SUBSCRIPTIONS, segment(id))
}

pub fn bill(id: &str) -> String {
    format!("{}/{}", BILLS, segment(id))
}

pub fn bill_by_number(bill_number: &str) -> String {
    format!("{}/number/{}", BILLS, segment(bill_number))
}

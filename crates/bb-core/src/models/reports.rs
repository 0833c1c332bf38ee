use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardKpis {
    pub total_customers: u64,
    pub active_subscriptions: u64,
    pub expiring_in7_days: u64,
    pub expiring_in30_days: u64,
    pub expired: u64,
    pub new_this_month: u64,
}

/// One labelled slice of a pie or bar chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartData {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerGrowthData {
    pub date: String,
    pub customers: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RevenueReport {
    pub total_revenue_this_month: f64,
    pub new_customers_this_month: u64,
    pub renewal_revenue: f64,
    pub new_revenue: f64,
    pub customer_growth_percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanDistribution {
    pub plan_name: String,
    pub subscriber_count: u64,
    pub revenue: f64,
}

use crate::client::endpoint::{best_effort, required};
use crate::{BestEffort, HttpClient, Required, endpoints};

use bb_core::{
    ChartData, CustomerGrowthData, DashboardKpis, Envelope, PlanDistribution, RevenueReport,
};

use std::sync::Arc;

/// Days of customer growth the dashboard charts by default
pub const DEFAULT_GROWTH_DAYS: u32 = 30;
/// Months of revenue trend the reports page charts by default
pub const DEFAULT_TREND_MONTHS: u32 = 6;

#[derive(Clone)]
pub struct ReportService {
    http: Arc<HttpClient>,
}

impl ReportService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn dashboard_kpis(&self) -> Required<DashboardKpis> {
        let result = self
            .http
            .get::<Envelope<DashboardKpis>>(endpoints::REPORTS_DASHBOARD_KPIS, &[])
            .await;
        required(result, "Failed to fetch dashboard KPIs")
    }

    pub async fn customer_growth(&self, days: u32) -> Required<Vec<CustomerGrowthData>> {
        let result = self
            .http
            .get::<Envelope<Vec<CustomerGrowthData>>>(
                endpoints::REPORTS_CUSTOMER_GROWTH,
                &[("days", days.to_string())],
            )
            .await;
        required(result, "Failed to fetch customer growth data")
    }

    pub async fn revenue(&self) -> Required<RevenueReport> {
        let result = self
            .http
            .get::<Envelope<RevenueReport>>(endpoints::REPORTS_REVENUE, &[])
            .await;
        required(result, "Failed to fetch revenue report")
    }

    pub async fn plan_distribution(&self) -> Required<Vec<PlanDistribution>> {
        let result = self
            .http
            .get::<Envelope<Vec<PlanDistribution>>>(endpoints::REPORTS_PLAN_DISTRIBUTION, &[])
            .await;
        required(result, "Failed to fetch plan distribution")
    }

    pub async fn subscription_distribution(&self) -> BestEffort<Vec<ChartData>> {
        let result = self
            .http
            .get::<Envelope<Vec<ChartData>>>(endpoints::REPORTS_SUBSCRIPTION_DISTRIBUTION, &[])
            .await;
        best_effort(result, "Subscription distribution")
    }

    pub async fn business_type_distribution(&self) -> BestEffort<Vec<ChartData>> {
        let result = self
            .http
            .get::<Envelope<Vec<ChartData>>>(endpoints::REPORTS_BUSINESS_TYPE_DISTRIBUTION, &[])
            .await;
        best_effort(result, "Business type distribution")
    }

    pub async fn revenue_trend(&self, months: u32) -> BestEffort<Vec<ChartData>> {
        let result = self
            .http
            .get::<Envelope<Vec<ChartData>>>(
                endpoints::REPORTS_REVENUE_TREND,
                &[("months", months.to_string())],
            )
            .await;
        best_effort(result, "Revenue trend")
    }
}

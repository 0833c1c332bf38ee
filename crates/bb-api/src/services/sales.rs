use crate::client::endpoint::required;
use crate::{HttpClient, Required, endpoints};

use bb_core::{Envelope, QueryParams, SalesFilters, SalesPerformance};

use std::sync::Arc;

use serde_json::Value;

/// Sales performance and the raw bills behind it
#[derive(Clone)]
pub struct SalesService {
    http: Arc<HttpClient>,
}

impl SalesService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn performance(&self, filters: &SalesFilters) -> Required<Vec<SalesPerformance>> {
        let result = self
            .http
            .get::<Envelope<Vec<SalesPerformance>>>(
                endpoints::SALES_PERFORMANCE,
                &filters.query_pairs(),
            )
            .await;
        required(result, "Failed to fetch sales performance")
    }

    pub async fn export(&self, filters: &SalesFilters) -> Required<Vec<u8>> {
        self.http
            .get_bytes(endpoints::SALES_EXPORT, &filters.query_pairs())
            .await
            .map_err(|e| e.with_fallback("Failed to export sales data"))
    }

    pub async fn bills(&self, filters: &SalesFilters) -> Required<Vec<Value>> {
        let result = self
            .http
            .get::<Envelope<Vec<Value>>>(endpoints::BILLS, &filters.query_pairs())
            .await;
        required(result, "Failed to fetch bills")
    }

    pub async fn bill(&self, id: &str) -> Required<Value> {
        let result = self
            .http
            .get::<Envelope<Value>>(&endpoints::bill(id), &[])
            .await;
        required(result, "Failed to fetch bill details")
    }

    pub async fn bill_by_number(&self, bill_number: &str) -> Required<Value> {
        let result = self
            .http
            .get::<Envelope<Value>>(&endpoints::bill_by_number(bill_number), &[])
            .await;
        required(result, "Failed to fetch bill by number")
    }

    /// Bills between two `YYYY-MM-DD` dates
    pub async fn bills_in_range(&self, start_date: &str, end_date: &str) -> Required<Vec<Value>> {
        let query = [
            ("startDate", start_date.to_string()),
            ("endDate", end_date.to_string()),
        ];
        let result = self
            .http
            .get::<Envelope<Vec<Value>>>(endpoints::BILLS_DATE_RANGE, &query)
            .await;
        required(result, "Failed to fetch bills by date range")
    }
}

use crate::client::endpoint::{best_effort, required};
use crate::{BestEffort, HttpClient, Required, endpoints};

use bb_core::{Customer, CustomerFilters, Envelope, Page, PageRequest, QueryParams};

use std::sync::Arc;

#[derive(Clone)]
pub struct CustomerService {
    http: Arc<HttpClient>,
}

impl CustomerService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// One page of customers matching the active filters
    pub async fn list(
        &self,
        filters: &CustomerFilters,
        page: PageRequest,
    ) -> Required<Page<Customer>> {
        let mut query = page.query_pairs();
        query.extend(filters.query_pairs());

        let result = self
            .http
            .get::<Envelope<Page<Customer>>>(endpoints::CUSTOMERS, &query)
            .await;
        required(result, "Failed to fetch customers")
    }

    pub async fn get(&self, id: &str) -> Required<Customer> {
        let result = self
            .http
            .get::<Envelope<Customer>>(&endpoints::customer(id), &[])
            .await;
        required(result, "Failed to fetch customer details")
    }

    /// Server-generated CSV of every customer matching the filters
    pub async fn export(&self, filters: &CustomerFilters) -> Required<Vec<u8>> {
        self.http
            .get_bytes(endpoints::CUSTOMERS_EXPORT, &filters.query_pairs())
            .await
            .map_err(|e| e.with_fallback("Failed to export customers"))
    }

    /// Distinct customer cities for the filter dropdown
    pub async fn cities(&self) -> BestEffort<Vec<String>> {
        let result = self
            .http
            .get::<Envelope<Vec<String>>>(endpoints::CUSTOMER_CITIES, &[])
            .await;
        best_effort(result, "Customer cities")
    }

    /// Distinct customer talukas for the filter dropdown
    pub async fn talukas(&self) -> BestEffort<Vec<String>> {
        let result = self
            .http
            .get::<Envelope<Vec<String>>>(endpoints::CUSTOMER_TALUKAS, &[])
            .await;
        best_effort(result, "Customer talukas")
    }
}

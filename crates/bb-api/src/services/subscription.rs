use crate::client::endpoint::{best_effort, required};
use crate::{BestEffort, HttpClient, Required, endpoints};

use bb_core::{Envelope, Page, PageRequest, Plan, QueryParams, Subscription, SubscriptionFilters};

use std::sync::Arc;

#[derive(Clone)]
pub struct SubscriptionService {
    http: Arc<HttpClient>,
}

impl SubscriptionService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn list(
        &self,
        filters: &SubscriptionFilters,
        page: PageRequest,
    ) -> Required<Page<Subscription>> {
        let mut query = page.query_pairs();
        query.extend(filters.query_pairs());

        let result = self
            .http
            .get::<Envelope<Page<Subscription>>>(endpoints::SUBSCRIPTIONS, &query)
            .await;
        required(result, "Failed to fetch subscriptions")
    }

    pub async fn get(&self, id: &str) -> Required<Subscription> {
        let result = self
            .http
            .get::<Envelope<Subscription>>(&endpoints::subscription(id), &[])
            .await;
        required(result, "Failed to fetch subscription details")
    }

    pub async fn export(&self, filters: &SubscriptionFilters) -> Required<Vec<u8>> {
        self.http
            .get_bytes(endpoints::SUBSCRIPTIONS_EXPORT, &filters.query_pairs())
            .await
            .map_err(|e| e.with_fallback("Failed to export subscriptions"))
    }

    pub async fn plans(&self) -> BestEffort<Vec<Plan>> {
        let result = self.http.get::<Envelope<Vec<Plan>>>(endpoints::PLANS, &[]).await;
        best_effort(result, "Plans")
    }
}

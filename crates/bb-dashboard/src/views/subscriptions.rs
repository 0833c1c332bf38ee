use crate::{ListPage, ListSource};

use bb_api::{Api, Required, SubscriptionService};
use bb_config::DashboardConfig;
use bb_core::{Page, PageRequest, Plan, Subscription, SubscriptionFilters};

use std::sync::Arc;

use async_trait::async_trait;

pub struct SubscriptionsSource {
    service: SubscriptionService,
}

impl SubscriptionsSource {
    pub fn new(service: SubscriptionService) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ListSource for SubscriptionsSource {
    type Filters = SubscriptionFilters;
    type Row = Subscription;

    const EXPORT_STEM: &'static str = "subscriptions";

    async fn fetch(
        &self,
        filters: &SubscriptionFilters,
        page: PageRequest,
    ) -> Required<Page<Subscription>> {
        self.service.list(filters, page).await
    }

    fn set_search(filters: &mut SubscriptionFilters, search: String) {
        filters.search = Some(search).filter(|s| !s.trim().is_empty());
    }
}

pub type SubscriptionsPage = ListPage<SubscriptionsSource>;

impl ListPage<SubscriptionsSource> {
    pub fn for_api(api: &Api, config: &DashboardConfig) -> Arc<Self> {
        ListPage::new(SubscriptionsSource::new(api.subscriptions()), config)
    }

    /// Plans for the filter dropdown; empty when the lookup is down
    pub async fn plans(&self) -> Vec<Plan> {
        self.source().service.plans().await.into_inner()
    }

    pub async fn export_all(&self) -> Required<Vec<u8>> {
        let filters = self.query().await.filters;
        self.source().service.export(&filters).await
    }
}

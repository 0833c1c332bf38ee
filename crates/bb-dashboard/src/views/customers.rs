use crate::{ListPage, ListSource};

use bb_api::{Api, CustomerService, Required};
use bb_config::DashboardConfig;
use bb_core::{Customer, CustomerFilters, Page, PageRequest};

use std::sync::Arc;

use async_trait::async_trait;

pub struct CustomersSource {
    service: CustomerService,
}

impl CustomersSource {
    pub fn new(service: CustomerService) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ListSource for CustomersSource {
    type Filters = CustomerFilters;
    type Row = Customer;

    const EXPORT_STEM: &'static str = "customers";

    async fn fetch(&self, filters: &CustomerFilters, page: PageRequest) -> Required<Page<Customer>> {
        self.service.list(filters, page).await
    }

    fn set_search(filters: &mut CustomerFilters, search: String) {
        filters.search = Some(search).filter(|s| !s.trim().is_empty());
    }
}

pub type CustomersPage = ListPage<CustomersSource>;

/// Dropdown choices; empty when the lookup endpoints are down
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerFilterOptions {
    pub cities: Vec<String>,
    pub talukas: Vec<String>,
}

impl ListPage<CustomersSource> {
    pub fn for_api(api: &Api, config: &DashboardConfig) -> Arc<Self> {
        ListPage::new(CustomersSource::new(api.customers()), config)
    }

    pub async fn filter_options(&self) -> CustomerFilterOptions {
        let service = &self.source().service;
        let (cities, talukas) = tokio::join!(service.cities(), service.talukas());

        CustomerFilterOptions {
            cities: cities.into_inner(),
            talukas: talukas.into_inner(),
        }
    }

    /// Server-side CSV of every customer matching the current filters
    pub async fn export_all(&self) -> Required<Vec<u8>> {
        let filters = self.query().await.filters;
        self.source().service.export(&filters).await
    }
}

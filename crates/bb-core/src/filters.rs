//! Filter and pagination state that list views turn into query parameters.
//!
//! A filter value of `ALL` or an empty string means "no filter" and is
//! never sent to the server.

use crate::DEFAULT_PAGE_SIZE;

use serde::{Deserialize, Serialize};

const ALL: &str = "ALL";

/// Anything that contributes `key=value` pairs to a request URL
pub trait QueryParams {
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Server-side pagination, sent verbatim as `page` and `pageSize`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

impl QueryParams for PageRequest {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerFilters {
    pub city: Vec<String>,
    pub taluka: Vec<String>,
    pub plan: Option<String>,
    pub status: Option<String>,
    pub business_type: Option<String>,
    pub search: Option<String>,
}

impl QueryParams for CustomerFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_many(&mut pairs, "city", &self.city);
        push_many(&mut pairs, "taluka", &self.taluka);
        push_active(&mut pairs, "plan", &self.plan);
        push_active(&mut pairs, "status", &self.status);
        push_active(&mut pairs, "businessType", &self.business_type);
        push_active(&mut pairs, "search", &self.search);
        pairs
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionFilters {
    pub status: Option<String>,
    pub search: Option<String>,
}

impl QueryParams for SubscriptionFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_active(&mut pairs, "status", &self.status);
        push_active(&mut pairs, "search", &self.search);
        pairs
    }
}

/// Date range and location filters for the sales view (dates as `YYYY-MM-DD`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesFilters {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
}

impl QueryParams for SalesFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_active(&mut pairs, "startDate", &self.start_date);
        push_active(&mut pairs, "endDate", &self.end_date);
        push_active(&mut pairs, "city", &self.city);
        push_active(&mut pairs, "district", &self.district);
        pairs
    }
}

fn is_active(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed != ALL
}

fn push_active(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(value) = value
        && is_active(value)
    {
        pairs.push((key, value.clone()));
    }
}

fn push_many(pairs: &mut Vec<(&'static str, String)>, key: &'static str, values: &[String]) {
    pairs.extend(
        values
            .iter()
            .filter(|v| is_active(v))
            .map(|v| (key, v.clone())),
    );
}

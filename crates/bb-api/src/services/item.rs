use crate::client::endpoint::required;
use crate::{HttpClient, Required, endpoints};

use bb_core::Envelope;

use std::sync::Arc;

use serde_json::Value;

/// Inventory lookups; items are passed through untyped
#[derive(Clone)]
pub struct ItemService {
    http: Arc<HttpClient>,
}

impl ItemService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Required<Vec<Value>> {
        self.fetch(endpoints::ITEMS, "Failed to fetch items").await
    }

    pub async fn low_stock(&self) -> Required<Vec<Value>> {
        self.fetch(endpoints::ITEMS_LOW_STOCK, "Failed to fetch low stock items")
            .await
    }

    pub async fn fast_moving(&self) -> Required<Vec<Value>> {
        self.fetch(endpoints::ITEMS_FAST_MOVING, "Failed to fetch fast-moving items")
            .await
    }

    async fn fetch(&self, path: &str, fallback: &str) -> Required<Vec<Value>> {
        let result = self.http.get::<Envelope<Vec<Value>>>(path, &[]).await;
        required(result, fallback)
    }
}

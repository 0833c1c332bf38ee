#![allow(dead_code)]

use bb_api::{Api, CredentialStore, HttpClient};
use bb_config::DashboardConfig;
use bb_core::User;

use std::time::Duration;

use serde_json::{Value, json};

pub fn api(uri: &str, credentials: CredentialStore) -> Api {
    Api::new(HttpClient::new(uri, Duration::from_secs(5), credentials).unwrap())
}

pub fn fast_config() -> DashboardConfig {
    DashboardConfig {
        search_debounce_ms: 50,
        ..DashboardConfig::default()
    }
}

pub fn user(role: &str) -> User {
    User {
        id: "u-1".to_string(),
        name: "Asha Patil".to_string(),
        email: "asha@example.com".to_string(),
        role: role.to_string(),
        token: None,
    }
}

pub fn login_body(role: &str, token: Option<&str>) -> Value {
    let mut data = json!({
        "id": "u-1",
        "name": "Asha Patil",
        "email": "asha@example.com",
        "role": role
    });
    if let Some(token) = token {
        data["token"] = json!(token);
    }
    json!({ "success": true, "data": data })
}

pub fn customer_json(id: &str, shop: &str) -> Value {
    json!({
        "id": id,
        "shopName": shop,
        "ownerName": "Ganesh Rao",
        "mobileNumber": "9876543210",
        "businessType": "KIRANA",
        "city": "Pune",
        "taluka": "Haveli",
        "planName": "Gold",
        "planStartDate": "2024-01-01",
        "planEndDate": "2025-01-01",
        "status": "ACTIVE",
        "hardwareType": "Printer",
        "salespersonName": "Ravi"
    })
}

pub fn customer_page(customers: Vec<Value>, page: u32) -> Value {
    json!({
        "success": true,
        "data": {
            "data": customers,
            "total": 60,
            "page": page,
            "pageSize": 25
        }
    })
}

//! Domain services against a wiremock server: endpoint paths, query
//! parameters, envelope unwrapping and fallback messages.

use bb_api::{Api, CredentialStore, HttpClient, VerifyPaymentRequest};
use bb_core::{
    BusinessType, CustomerFilters, LoginCredentials, PageRequest, SalesFilters,
    SubscriptionFilters,
};

use std::time::Duration;

use serde_json::{Map, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path, query_param},
};

fn api(uri: &str) -> Api {
    Api::new(HttpClient::new(uri, Duration::from_secs(5), CredentialStore::in_memory()).unwrap())
}

fn customer_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "shopName": "Shree Ganesh Kirana",
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

#[tokio::test]
async fn test_login_returns_user_with_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "asha@example.com", "password": "secret123"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "id": "u-1",
                "name": "Asha Patil",
                "email": "asha@example.com",
                "role": "OWNER",
                "token": "tok-123"
            }
        })))
        .mount(&mock_server)
        .await;

    let user = api(&mock_server.uri())
        .auth()
        .login(&LoginCredentials {
            email: "asha@example.com".to_string(),
            password: "secret123".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.role, "OWNER");
    assert_eq!(user.token.as_deref(), Some("tok-123"));
}

#[tokio::test]
async fn test_login_failure_prefers_server_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&mock_server)
        .await;

    let err = api(&mock_server.uri())
        .auth()
        .login(&LoginCredentials {
            email: "asha@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Invalid credentials");
}

#[tokio::test]
async fn test_change_password_sends_camel_case_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/change-password"))
        .and(body_json(json!({"oldPassword": "old-pass", "newPassword": "new-pass-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    api(&mock_server.uri())
        .auth()
        .change_password("old-pass", "new-pass-1")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_customer_list_sends_exact_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "data": [customer_json("c-1")],
                "total": 51,
                "page": 3,
                "pageSize": 25
            }
        })))
        .mount(&mock_server)
        .await;

    let filters = CustomerFilters {
        city: vec!["Pune".to_string(), "Nashik".to_string()],
        status: Some("ACTIVE".to_string()),
        plan: Some("ALL".to_string()),
        search: Some(String::new()),
        ..CustomerFilters::default()
    };

    let page = api(&mock_server.uri())
        .customers()
        .list(&filters, PageRequest::new(3, 25))
        .await
        .unwrap();

    assert_eq!(page.total, 51);
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].shop_name, "Shree Ganesh Kirana");

    let requests = mock_server.received_requests().await.unwrap();
    let pairs: Vec<(String, String)> = requests[0].url.query_pairs().into_owned().collect();
    let expected: Vec<(String, String)> = [
        ("page", "3"),
        ("pageSize", "25"),
        ("city", "Pune"),
        ("city", "Nashik"),
        ("status", "ACTIVE"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    assert_eq!(pairs, expected);
}

#[tokio::test]
async fn test_customer_list_failure_uses_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let err = api(&mock_server.uri())
        .customers()
        .list(&CustomerFilters::default(), PageRequest::default())
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Failed to fetch customers");
}

#[tokio::test]
async fn test_customer_detail_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/customers/c-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": customer_json("c-7")
        })))
        .mount(&mock_server)
        .await;

    let customer = api(&mock_server.uri())
        .customers()
        .get("c-7")
        .await
        .unwrap();

    assert_eq!(customer.id, "c-7");
}

#[tokio::test]
async fn test_cities_failure_yields_empty_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/customers/cities"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .mount(&mock_server)
        .await;

    let cities = api(&mock_server.uri()).customers().cities().await;

    assert!(cities.is_degraded());
    assert!(cities.is_empty());
}

#[tokio::test]
async fn test_talukas_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/customers/talukas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": ["Haveli", "Mulshi"]
        })))
        .mount(&mock_server)
        .await;

    let talukas = api(&mock_server.uri()).customers().talukas().await;

    assert!(!talukas.is_degraded());
    assert_eq!(talukas.into_inner(), vec!["Haveli", "Mulshi"]);
}

#[tokio::test]
async fn test_customer_export_returns_raw_bytes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/customers/export"))
        .and(query_param("status", "EXPIRED"))
        .respond_with(ResponseTemplate::new(200).set_body_string("id,name\n1,A\n"))
        .mount(&mock_server)
        .await;

    let filters = CustomerFilters {
        status: Some("EXPIRED".to_string()),
        ..CustomerFilters::default()
    };
    let bytes = api(&mock_server.uri())
        .customers()
        .export(&filters)
        .await
        .unwrap();

    assert_eq!(bytes, b"id,name\n1,A\n");
}

#[tokio::test]
async fn test_subscription_export_failure_uses_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/subscriptions/export"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let err = api(&mock_server.uri())
        .subscriptions()
        .export(&SubscriptionFilters::default())
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Failed to export subscriptions");
}

#[tokio::test]
async fn test_plans_failure_yields_empty_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/plans"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let plans = api(&mock_server.uri()).subscriptions().plans().await;

    assert!(plans.is_empty());
}

#[tokio::test]
async fn test_sales_performance_sends_date_range() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/sales/performance"))
        .and(query_param("startDate", "2024-04-01"))
        .and(query_param("endDate", "2024-04-30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let filters = SalesFilters {
        start_date: Some("2024-04-01".to_string()),
        end_date: Some("2024-04-30".to_string()),
        ..SalesFilters::default()
    };
    let rows = api(&mock_server.uri())
        .sales()
        .performance(&filters)
        .await
        .unwrap();

    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_bill_by_number_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/bills/number/INV-0042"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"billNumber": "INV-0042", "total": 320}
        })))
        .mount(&mock_server)
        .await;

    let bill = api(&mock_server.uri())
        .sales()
        .bill_by_number("INV-0042")
        .await
        .unwrap();

    assert_eq!(bill["total"], 320);
}

#[tokio::test]
async fn test_bill_number_with_reserved_characters_stays_one_segment() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/bills/number/INV%2F2024%3F7%23a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"billNumber": "INV/2024?7#a", "total": 75}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let bill = api(&mock_server.uri())
        .sales()
        .bill_by_number("INV/2024?7#a")
        .await
        .unwrap();

    assert_eq!(bill["total"], 75);
}

#[tokio::test]
async fn test_dashboard_kpis_rejected_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/reports/dashboard-kpis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false})))
        .mount(&mock_server)
        .await;

    let err = api(&mock_server.uri())
        .reports()
        .dashboard_kpis()
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Failed to fetch dashboard KPIs");
}

#[tokio::test]
async fn test_customer_growth_sends_days() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/reports/customer-growth"))
        .and(query_param("days", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{"date": "2024-04-01", "customers": 12}]
        })))
        .mount(&mock_server)
        .await;

    let growth = api(&mock_server.uri())
        .reports()
        .customer_growth(30)
        .await
        .unwrap();

    assert_eq!(growth[0].customers, 12);
}

#[tokio::test]
async fn test_revenue_trend_failure_yields_empty_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/reports/revenue-trend"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let trend = api(&mock_server.uri()).reports().revenue_trend(6).await;

    assert!(trend.is_degraded());
    assert!(trend.is_empty());
}

#[tokio::test]
async fn test_verify_payment_sends_gateway_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/payments/verify"))
        .and(body_json(json!({
            "razorpay_order_id": "order_1",
            "razorpay_payment_id": "pay_1",
            "razorpay_signature": "sig",
            "planId": "gold"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"verified": true}
        })))
        .mount(&mock_server)
        .await;

    let mut extra = Map::new();
    extra.insert("planId".to_string(), json!("gold"));
    let result = api(&mock_server.uri())
        .payments()
        .verify(&VerifyPaymentRequest {
            razorpay_order_id: "order_1".to_string(),
            razorpay_payment_id: "pay_1".to_string(),
            razorpay_signature: "sig".to_string(),
            extra,
        })
        .await
        .unwrap();

    assert_eq!(result["verified"], true);
}

#[tokio::test]
async fn test_low_stock_failure_uses_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/items/low-stock"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let err = api(&mock_server.uri())
        .items()
        .low_stock()
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Failed to fetch low stock items");
}

#[tokio::test]
async fn test_eligibility_sends_business_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/user/eligibility"))
        .and(body_json(json!({"businessType": "RESTAURANT"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"eligible": false}
        })))
        .mount(&mock_server)
        .await;

    let result = api(&mock_server.uri())
        .users()
        .check_eligibility(BusinessType::Restaurant)
        .await
        .unwrap();

    assert_eq!(result["eligible"], false);
}

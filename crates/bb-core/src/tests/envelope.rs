use crate::{Customer, Envelope, Page};

use serde_json::json;

#[test]
fn test_envelope_prefers_message_over_error() {
    let envelope: Envelope<()> = serde_json::from_value(json!({
        "success": false,
        "message": "Plan not found",
        "error": "NOT_FOUND"
    }))
    .unwrap();

    assert_eq!(envelope.server_message(), Some("Plan not found"));
}

#[test]
fn test_envelope_falls_back_to_error_field() {
    let envelope: Envelope<()> =
        serde_json::from_value(json!({ "success": false, "error": "boom" })).unwrap();

    assert_eq!(envelope.server_message(), Some("boom"));
}

#[test]
fn test_envelope_empty_message_is_ignored() {
    let envelope: Envelope<()> =
        serde_json::from_value(json!({ "success": false, "message": "" })).unwrap();

    assert_eq!(envelope.server_message(), None);
}

#[test]
fn test_envelope_missing_data_is_none() {
    let envelope: Envelope<Vec<String>> =
        serde_json::from_value(json!({ "success": true })).unwrap();

    assert!(envelope.success);
    assert!(envelope.data.is_none());
}

#[test]
fn test_paginated_customers_deserialize() {
    let envelope: Envelope<Page<Customer>> = serde_json::from_value(json!({
        "success": true,
        "data": {
            "data": [{
                "id": "c-1",
                "shopName": "Shree Kirana",
                "ownerName": "Ramesh",
                "mobileNumber": "9876543210",
                "businessType": "KIRANA",
                "city": "Pune",
                "taluka": "Haveli",
                "planName": "Gold",
                "planStartDate": "2024-01-01",
                "planEndDate": "2024-12-31",
                "status": "ACTIVE",
                "hardwareType": "MACHINE",
                "salespersonName": "Suresh"
            }],
            "total": 41,
            "page": 2,
            "pageSize": 25
        }
    }))
    .unwrap();

    let page = envelope.data.unwrap();
    assert_eq!(page.total, 41);
    assert_eq!(page.page, 2);
    assert_eq!(page.page_size, 25);
    assert_eq!(page.data[0].shop_name, "Shree Kirana");
}

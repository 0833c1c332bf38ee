use crate::SubscriptionStatus;

use std::str::FromStr;

#[test]
fn test_subscription_status_from_str() {
    assert_eq!(
        SubscriptionStatus::from_str("EXPIRING_SOON").unwrap(),
        SubscriptionStatus::ExpiringSoon
    );
    assert!(SubscriptionStatus::from_str("PAUSED").is_err());
}

#[test]
fn test_subscription_status_serializes_screaming_snake_case() {
    let json = serde_json::to_string(&SubscriptionStatus::ExpiringSoon).unwrap();
    assert_eq!(json, "\"EXPIRING_SOON\"");
}

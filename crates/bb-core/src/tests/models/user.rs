use crate::{Role, User};

use serde_json::json;

fn user_with_role(role: &str) -> User {
    User {
        id: "u-1".to_string(),
        name: "Asha Patil".to_string(),
        email: "asha@example.com".to_string(),
        role: role.to_string(),
        token: None,
    }
}

#[test]
fn test_user_deserializes_without_token() {
    let user: User = serde_json::from_value(json!({
        "id": "u-1",
        "name": "Asha Patil",
        "email": "asha@example.com",
        "role": "OWNER"
    }))
    .unwrap();

    assert_eq!(user.parsed_role(), Some(Role::Owner));
    assert!(user.token.is_none());
}

#[test]
fn test_user_without_token_omits_field_when_serialized() {
    let value = serde_json::to_value(user_with_role("ADMIN")).unwrap();
    assert!(value.get("token").is_none());
}

#[test]
fn test_dashboard_access_follows_role() {
    assert!(user_with_role("OWNER").has_dashboard_access());
    assert!(user_with_role("COORDINATOR").has_dashboard_access());
    assert!(!user_with_role("STAFF").has_dashboard_access());
    assert!(!user_with_role("something-new").has_dashboard_access());
}

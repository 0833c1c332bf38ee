use crate::{ApiError, NETWORK_ERROR_MESSAGE};

#[test]
fn test_with_fallback_fills_missing_server_message() {
    let err = ApiError::server(500, None).with_fallback("Failed to fetch customers");

    assert_eq!(err.user_message(), "Failed to fetch customers");
}

#[test]
fn test_with_fallback_keeps_server_message() {
    let err = ApiError::server(500, Some("Database unavailable".to_string()))
        .with_fallback("Failed to fetch customers");

    assert_eq!(err.user_message(), "Database unavailable");
}

#[test]
fn test_with_fallback_leaves_auth_errors_alone() {
    let err = ApiError::unauthenticated(None).with_fallback("Login failed");

    assert!(matches!(err, ApiError::Unauthenticated { .. }));
    assert_eq!(err.user_message(), "Session expired. Please log in again.");
}

#[test]
fn test_server_without_message_shows_status() {
    let err = ApiError::server(502, None);

    assert_eq!(err.user_message(), "Request failed with status code 502");
}

#[test]
fn test_server_empty_message_counts_as_missing() {
    let err = ApiError::server(400, Some(String::new()));

    assert!(matches!(err, ApiError::Server { message: None, .. }));
}

#[test]
fn test_forbidden_default_message() {
    let err = ApiError::forbidden(None);

    assert!(err.is_auth_failure());
    assert_eq!(
        err.user_message(),
        "You do not have permission to access this resource."
    );
}

#[test]
fn test_validation_is_not_auth_failure() {
    let err = ApiError::validation("Please enter both email and password");

    assert!(!err.is_auth_failure());
    assert_eq!(err.user_message(), "Please enter both email and password");
}

#[test]
fn test_display_names_the_category() {
    let err = ApiError::storage("disk full");

    assert!(err.to_string().starts_with("Storage error: disk full"));
}

#[test]
fn test_json_error_from_serde() {
    let parse_err = serde_json::from_str::<u32>("nope").unwrap_err();
    let err: ApiError = parse_err.into();

    assert!(matches!(err, ApiError::Json { .. }));
}

#[test]
fn test_network_message_constant() {
    assert_eq!(
        NETWORK_ERROR_MESSAGE,
        "Network error. Please check your connection."
    );
}

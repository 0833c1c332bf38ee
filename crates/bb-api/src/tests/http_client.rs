use crate::client::http_client::server_message;
use crate::{CredentialStore, HttpClient};

use std::time::Duration;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = HttpClient::new(
        "http://localhost:8080/",
        Duration::from_secs(5),
        CredentialStore::in_memory(),
    )
    .unwrap();

    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[test]
fn test_server_message_prefers_message_field() {
    let body = br#"{"message": "Customer not found", "error": "NOT_FOUND"}"#;

    assert_eq!(server_message(body).as_deref(), Some("Customer not found"));
}

#[test]
fn test_server_message_reads_error_string() {
    assert_eq!(
        server_message(br#"{"error": "Bad filter"}"#).as_deref(),
        Some("Bad filter")
    );
}

#[test]
fn test_server_message_reads_nested_error() {
    let body = br#"{"error": {"code": "CONFLICT", "message": "Already renewed"}}"#;

    assert_eq!(server_message(body).as_deref(), Some("Already renewed"));
}

#[test]
fn test_server_message_none_for_plain_text() {
    assert!(server_message(b"<html>Bad Gateway</html>").is_none());
}

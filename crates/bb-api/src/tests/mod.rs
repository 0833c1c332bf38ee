mod endpoints;
mod error;
mod http_client;

use bb_core::User;

pub(crate) fn owner() -> User {
    User {
        id: "u-1".to_string(),
        name: "Asha Patil".to_string(),
        email: "asha@example.com".to_string(),
        role: "OWNER".to_string(),
        token: Some("tok-123".to_string()),
    }
}

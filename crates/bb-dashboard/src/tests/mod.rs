mod debounce;
mod route;
mod view_state;

use bb_core::User;

pub(crate) fn user_with_role(role: &str) -> User {
    User {
        id: "u-1".to_string(),
        name: "Asha Patil".to_string(),
        email: "asha@example.com".to_string(),
        role: role.to_string(),
        token: Some("tok-123".to_string()),
    }
}

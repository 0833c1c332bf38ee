use crate::Role;

use serde::{Deserialize, Serialize};

/// Account returned by a successful login and kept in persisted storage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Raw role string; unknown roles are kept as sent by the server
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl User {
    /// Parsed role, `None` when the server sent a role this client does not know
    pub fn parsed_role(&self) -> Option<Role> {
        self.role.parse().ok()
    }

    /// Whether this user may open the owner dashboard
    pub fn has_dashboard_access(&self) -> bool {
        self.parsed_role()
            .map(|role| role.is_dashboard_role())
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

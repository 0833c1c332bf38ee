use crate::client::endpoint::{required, required_unit};
use crate::{HttpClient, Required, endpoints};

use bb_core::{Envelope, LoginCredentials, User};

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

#[derive(Clone)]
pub struct AuthService {
    http: Arc<HttpClient>,
}

impl AuthService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Exchange credentials for a user carrying a bearer token.
    ///
    /// Does not persist anything; the session store owns the credentials.
    pub async fn login(&self, credentials: &LoginCredentials) -> Required<User> {
        let result = self
            .http
            .post::<_, Envelope<User>>(endpoints::AUTH_LOGIN, credentials)
            .await;
        required(result, "Login failed")
    }

    pub async fn logout(&self) -> Required<()> {
        let result = self
            .http
            .post_empty::<Envelope<Value>>(endpoints::AUTH_LOGOUT)
            .await;
        required_unit(result, "Logout failed")
    }

    pub async fn change_password(&self, old_password: &str, new_password: &str) -> Required<()> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct ChangePasswordRequest<'a> {
            old_password: &'a str,
            new_password: &'a str,
        }

        let body = ChangePasswordRequest {
            old_password,
            new_password,
        };
        let result = self
            .http
            .post::<_, Envelope<Value>>(endpoints::AUTH_CHANGE_PASSWORD, &body)
            .await;
        required_unit(result, "Failed to change password")
    }
}

use crate::{GuardDecision, Route, Router, SessionStore};

use bb_api::{ApiError, ApiResult};
use bb_core::LoginCredentials;

use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

pub struct LoginView {
    session: Arc<SessionStore>,
    router: Arc<Router>,
}

impl LoginView {
    pub fn new(session: Arc<SessionStore>, router: Arc<Router>) -> Self {
        Self { session, router }
    }

    /// Log in and head for the dashboard; the guard decides what actually renders.
    pub async fn submit(&self, form: LoginForm) -> ApiResult<GuardDecision> {
        if form.email.trim().is_empty() || form.password.is_empty() {
            return Err(ApiError::validation("Please enter both email and password"));
        }

        let credentials = LoginCredentials {
            email: form.email.trim().to_string(),
            password: form.password,
        };
        self.session.login(&credentials).await?;

        Ok(self.router.navigate(Route::Dashboard))
    }
}

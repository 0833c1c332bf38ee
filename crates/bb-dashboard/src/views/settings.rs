use bb_api::{Api, ApiError, ApiResult, AuthService};

use log::info;
use tokio::sync::Mutex;

pub const PASSWORD_CHANGED_MESSAGE: &str = "Password changed successfully";

const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordForm {
    pub fn new(
        old_password: impl Into<String>,
        new_password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            old_password: old_password.into(),
            new_password: new_password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Client-side checks, first failure wins
    pub fn validate(&self) -> ApiResult<()> {
        if self.old_password.is_empty()
            || self.new_password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(ApiError::validation("Please fill in all password fields"));
        }

        if self.new_password != self.confirm_password {
            return Err(ApiError::validation(
                "New password and confirm password do not match",
            ));
        }

        if self.new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ApiError::validation(
                "New password must be at least 8 characters long",
            ));
        }

        Ok(())
    }
}

/// Password change form of the settings page
pub struct SettingsView {
    auth: AuthService,
    form: Mutex<PasswordForm>,
}

impl SettingsView {
    pub fn new(auth: AuthService) -> Self {
        Self {
            auth,
            form: Mutex::new(PasswordForm::default()),
        }
    }

    pub fn for_api(api: &Api) -> Self {
        Self::new(api.auth())
    }

    pub async fn form(&self) -> PasswordForm {
        self.form.lock().await.clone()
    }

    /// Submit `form`; it is kept on failure and cleared on success.
    pub async fn change_password(&self, form: PasswordForm) -> ApiResult<&'static str> {
        *self.form.lock().await = form.clone();

        form.validate()?;
        self.auth
            .change_password(&form.old_password, &form.new_password)
            .await?;

        info!("Password changed");
        *self.form.lock().await = PasswordForm::default();
        Ok(PASSWORD_CHANGED_MESSAGE)
    }
}

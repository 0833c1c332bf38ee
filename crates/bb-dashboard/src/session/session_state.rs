use bb_core::User;

/// Authentication state of the running dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Persisted credentials not read yet
    #[default]
    Loading,
    Authenticated(User),
    Unauthenticated,
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn snapshot(&self) -> Session {
        Session {
            user: self.user().cloned(),
            authenticated: self.is_authenticated(),
            loading: self.is_loading(),
        }
    }
}

/// Flat view of a [`SessionState`] for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    pub authenticated: bool,
    pub loading: bool,
}

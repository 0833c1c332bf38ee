use crate::{Session, SessionState};

use bb_api::{Api, ApiError, ApiResult, AuthEvent, AuthService, CredentialStore};
use bb_core::{LoginCredentials, User};

use log::{debug, info, warn};
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

/// Owner of the session.
///
/// The only component that moves between [`SessionState`]s; everything
/// else observes it through [`SessionStore::subscribe`].
pub struct SessionStore {
    auth: AuthService,
    credentials: CredentialStore,
    state_tx: watch::Sender<SessionState>,
    state_rx: watch::Receiver<SessionState>,
}

impl SessionStore {
    pub fn new(auth: AuthService, credentials: CredentialStore) -> Self {
        let (state_tx, state_rx) = watch::channel(SessionState::Loading);

        Self {
            auth,
            credentials,
            state_tx,
            state_rx,
        }
    }

    pub fn from_api(api: &Api) -> Self {
        Self::new(api.auth(), api.credentials().clone())
    }

    /// Restore the session from persisted credentials.
    ///
    /// Both the token and the user must be present; anything else starts
    /// unauthenticated.
    pub fn initialize(&self) -> SessionState {
        let state = match (self.credentials.token(), self.credentials.user()) {
            (Ok(Some(_)), Ok(Some(user))) => {
                debug!("Restored session for role {}", user.role);
                SessionState::Authenticated(user)
            }
            (Err(e), _) | (_, Err(e)) => {
                warn!("Could not read persisted session: {}", e);
                SessionState::Unauthenticated
            }
            _ => SessionState::Unauthenticated,
        };

        self.set_state(state.clone());
        state
    }

    /// Authenticate and persist the token and user as one pair
    pub async fn login(&self, credentials: &LoginCredentials) -> ApiResult<User> {
        let user = self.auth.login(credentials).await?;

        let Some(token) = user.token.as_deref().filter(|t| !t.is_empty()) else {
            warn!("Login response carried no token");
            return Err(ApiError::server(200, None).with_fallback("Login failed"));
        };

        self.credentials.save(token, &user)?;
        info!("Logged in with role {}", user.role);

        self.set_state(SessionState::Authenticated(user.clone()));
        Ok(user)
    }

    /// End the session; local credentials are cleared even when the server call fails
    pub async fn logout(&self) {
        if let Err(e) = self.auth.logout().await {
            warn!("Logout request failed: {}", e.user_message());
        }

        if let Err(e) = self.credentials.clear() {
            warn!("Failed to clear persisted credentials: {}", e);
        }

        info!("Logged out");
        self.set_state(SessionState::Unauthenticated);
    }

    /// Drop to unauthenticated whenever the transport reports a 401
    pub fn watch_auth_events(&self, mut events: broadcast::Receiver<AuthEvent>) -> JoinHandle<()> {
        let state_tx = self.state_tx.clone();

        tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(AuthEvent::Unauthenticated) => {
                        debug!("Session ended by server");
                        let _ = state_tx.send(SessionState::Unauthenticated);
                    }
                    Ok(AuthEvent::Forbidden) => {}
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!("Missed {} auth events", skipped);
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }

    fn set_state(&self, state: SessionState) {
        let _ = self.state_tx.send(state);
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_rx.clone()
    }

    pub fn state(&self) -> SessionState {
        self.state_rx.borrow().clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state_rx.borrow().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state_rx.borrow().is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.state_rx.borrow().is_loading()
    }

    pub fn snapshot(&self) -> Session {
        self.state_rx.borrow().snapshot()
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }
}

use crate::{GuardDecision, Route, RouteGuard, SessionStore};

use bb_api::AuthEvent;

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

/// Current screen, guarded by the live session
pub struct Router {
    session: Arc<SessionStore>,
    route_tx: watch::Sender<Route>,
    route_rx: watch::Receiver<Route>,
}

impl Router {
    pub fn new(session: Arc<SessionStore>) -> Self {
        let (route_tx, route_rx) = watch::channel(Route::Login);

        Self {
            session,
            route_tx,
            route_rx,
        }
    }

    /// Ask for `route`; the guard is re-evaluated against the session every time.
    ///
    /// `Wait` leaves the current route unchanged.
    pub fn navigate(&self, route: Route) -> GuardDecision {
        let decision = RouteGuard::evaluate(&self.session.state(), route);

        match decision {
            GuardDecision::Render(target) => self.set_route(target),
            GuardDecision::Redirect(target) => {
                debug!("Redirecting {} to {}", route, target);
                self.set_route(target);
            }
            GuardDecision::Wait => debug!("Session loading, holding navigation to {}", route),
        }

        decision
    }

    /// Follow transport auth failures: 401 to login, 403 to access denied
    pub fn spawn_auth_redirects(
        &self,
        mut events: broadcast::Receiver<AuthEvent>,
    ) -> JoinHandle<()> {
        let route_tx = self.route_tx.clone();

        tokio::spawn(async move {
            loop {
                let target = match events.recv().await {
                    Ok(AuthEvent::Unauthenticated) => Route::Login,
                    Ok(AuthEvent::Forbidden) => Route::AccessDenied,
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!("Missed {} auth events", skipped);
                        continue;
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                };

                info!("Auth failure, navigating to {}", target);
                let _ = route_tx.send(target);
            }
        })
    }

    fn set_route(&self, route: Route) {
        let _ = self.route_tx.send(route);
    }

    pub fn current(&self) -> Route {
        *self.route_rx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Route> {
        self.route_rx.clone()
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }
}

use crate::{Route, SessionState};

/// Outcome of asking to open a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still loading; show a spinner and ask again
    Wait,
    Redirect(Route),
    Render(Route),
}

/// Admission rules for protected routes
pub struct RouteGuard;

impl RouteGuard {
    pub fn evaluate(session: &SessionState, route: Route) -> GuardDecision {
        if route.is_public() {
            return GuardDecision::Render(route);
        }

        match session {
            SessionState::Loading => GuardDecision::Wait,
            SessionState::Unauthenticated => GuardDecision::Redirect(Route::Login),
            SessionState::Authenticated(user) if !user.has_dashboard_access() => {
                GuardDecision::Redirect(Route::AccessDenied)
            }
            SessionState::Authenticated(_) => GuardDecision::Render(route),
        }
    }
}

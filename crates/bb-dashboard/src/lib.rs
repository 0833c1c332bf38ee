//! bb-dashboard
//!
//! Page controllers for the owner dashboard: the observable session, the
//! role-based route guard, and one view per dashboard page. Views publish
//! their state through `watch` channels; any front end can render them.

pub mod debounce;
pub mod refresh;
pub mod routing;
pub mod sequence;
pub mod session;
pub mod views;

#[cfg(test)]
mod tests;

pub use debounce::Debouncer;
pub use refresh::RefreshHandle;
pub use routing::guard::{GuardDecision, RouteGuard};
pub use routing::route::Route;
pub use routing::router::Router;
pub use sequence::{RequestSequence, Ticket};
pub use session::session_state::{Session, SessionState};
pub use session::session_store::SessionStore;
pub use views::customers::{CustomerFilterOptions, CustomersPage, CustomersSource};
pub use views::dashboard::{DashboardData, DashboardView};
pub use views::list_page::{ListPage, ListQuery, ListSource};
pub use views::login::{LoginForm, LoginView};
pub use views::reports::{ReportsData, ReportsView};
pub use views::sales::{SalesPage, SalesTotals};
pub use views::settings::{PASSWORD_CHANGED_MESSAGE, PasswordForm, SettingsView};
pub use views::subscriptions::{SubscriptionsPage, SubscriptionsSource};
pub use views::view_state::ViewState;

use std::fmt;

/// Screens of the owner dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Customers,
    Subscriptions,
    Sales,
    Hardware,
    Reports,
    Settings,
    AccessDenied,
}

impl Route {
    pub const ALL: [Route; 9] = [
        Route::Login,
        Route::Dashboard,
        Route::Customers,
        Route::Subscriptions,
        Route::Sales,
        Route::Hardware,
        Route::Reports,
        Route::Settings,
        Route::AccessDenied,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/",
            Route::Customers => "/customers",
            Route::Subscriptions => "/subscriptions",
            Route::Sales => "/sales",
            Route::Hardware => "/hardware",
            Route::Reports => "/reports",
            Route::Settings => "/settings",
            Route::AccessDenied => "/access-denied",
        }
    }

    /// Resolve a path; unknown paths land on the dashboard.
    pub fn from_path(path: &str) -> Route {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };

        Route::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
            .unwrap_or(Route::Dashboard)
    }

    /// Reachable without a session
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login | Route::AccessDenied)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
            Route::Customers => "Customers",
            Route::Subscriptions => "Subscriptions",
            Route::Sales => "Sales Performance",
            Route::Hardware => "Hardware Management",
            Route::Reports => "Reports",
            Route::Settings => "Settings",
            Route::AccessDenied => "Access Denied",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

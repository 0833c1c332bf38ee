use bb_dashboard::Route;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] bb_config::ConfigError),

    #[error("{}", .0.user_message())]
    Api(#[from] bb_api::ApiError),

    #[error("{0}")]
    Core(#[from] bb_core::CoreError),

    /// The route guard refused the screen a command belongs to
    #[error("{route} is not available: redirected to {target}{}", redirect_hint(.target))]
    Redirect { route: Route, target: Route },

    /// A view ended in its error state
    #[error("{0}")]
    View(String),

    #[error("Session is still loading")]
    SessionLoading,

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn redirect_hint(target: &Route) -> &'static str {
    match target {
        Route::Login => " (run `bb login` first)",
        Route::AccessDenied => " (only owner, admin and coordinator accounts may use the dashboard)",
        _ => "",
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

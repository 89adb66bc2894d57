//! Error types for the shell.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Shell error type.
#[derive(Error, Debug)]
pub enum ShellError {
    /// A brand size outside the predefined scale set.
    #[error("Unknown brand size: {0:?} (expected sm, md, lg or xl)")]
    UnknownBrandSize(String),

    /// A linked control was built without its transition callback.
    #[error("{component} requires a `{callback}` callback")]
    MissingCallback {
        /// Component being constructed.
        component: &'static str,
        /// Name of the missing callback.
        callback: &'static str,
    },

    /// No view is registered for the requested path.
    #[error("No view for path: {0}")]
    UnknownRoute(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result type alias for shell operations.
pub type Result<T> = std::result::Result<T, ShellError>;

impl IntoResponse for ShellError {
    fn into_response(self) -> Response {
        match self {
            Self::UnknownRoute(path) => {
                tracing::debug!(name: "route.not_found", path = %path, "No view for path");
                (
                    StatusCode::NOT_FOUND,
                    Html(crate::ui::app::not_found_page(&path)),
                )
                    .into_response()
            }
            other => {
                tracing::error!(name: "route.failed", error = %other, "Rendering failed");
                (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()).into_response()
            }
        }
    }
}

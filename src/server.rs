use axum::{
    Json, Router,
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, StatusCode, Uri, header},
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::info;

use crate::AppState;
use crate::config::AppConfig;
use crate::error::ShellError;
use crate::navigation::ViewRoute;
use crate::ui::app::{ActiveView, ShellContext};

/// Header HTMX sets on every request it issues.
const HX_REQUEST: &str = "hx-request";

/// Header HTMX adds when restoring a history entry missing from its cache.
/// The response replaces `<body>`, so it must be a full document.
const HX_HISTORY_RESTORE: &str = "hx-history-restore-request";

/// Request headers that select between document and fragment.
const VARY_ON: &str = "HX-Request, HX-History-Restore-Request";

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let state = AppState::from_config(Arc::clone(&config));
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        static_dir = %config.assets.static_dir,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let timeout_duration = Duration::from_secs(state.config.server.request_timeout_secs);
    let static_dir = state.config.assets.static_dir.clone();

    Router::new()
        .route("/", get(landing_handler))
        .route("/upload", get(upload_handler))
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found_handler)
        .layer(axum::middleware::from_fn(
            move |req: Request, next: Next| async move {
                match tokio::time::timeout(timeout_duration, next.run(req)).await {
                    Ok(res) => res,
                    Err(_) => (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response(),
                }
            },
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ─────────────────────────────────────────────────────────────────────────────
// Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Landing page.
async fn landing_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    render_route(&state.shell, ViewRoute::Landing, &headers)
}

/// GET /upload - Upload page.
async fn upload_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    render_route(&state.shell, ViewRoute::Upload, &headers)
}

/// Any other path.
async fn not_found_handler(uri: Uri) -> ShellError {
    ShellError::UnknownRoute(uri.path().to_string())
}

/// Render `route` as a full document, or as a fragment for HTMX swaps.
fn render_route(ctx: &ShellContext, route: ViewRoute, headers: &HeaderMap) -> Response {
    let view = ActiveView::for_route(ctx, route);
    let partial = is_htmx(headers) && !header_is_true(headers, HX_HISTORY_RESTORE);

    info!(name: "route.rendered", route = %route, partial, "Route rendered");

    let body = if partial {
        view.fragment()
    } else {
        view.document()
    };
    let mut response = Html(body).into_response();
    response
        .headers_mut()
        .insert(header::VARY, HeaderValue::from_static(VARY_ON));
    response
}

fn is_htmx(headers: &HeaderMap) -> bool {
    header_is_true(headers, HX_REQUEST)
}

fn header_is_true(headers: &HeaderMap, name: &str) -> bool {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

// ─────────────────────────────────────────────────────────────────────────────
// API Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Response from the health probe.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// GET /health - Liveness probe.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "slides-shell is alive",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_htmx() {
        let mut headers = HeaderMap::new();
        assert!(!is_htmx(&headers));

        headers.insert(HX_REQUEST, HeaderValue::from_static("true"));
        assert!(is_htmx(&headers));

        headers.insert(HX_REQUEST, HeaderValue::from_static("false"));
        assert!(!is_htmx(&headers));
        assert!(!header_is_true(&headers, HX_HISTORY_RESTORE));
    }
}

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::json;
use tracing::debug;

use super::RedirectTable;

/// Answer legacy paths with `301 Moved Permanently`; everything else reaches the router.
pub async fn redirect_legacy_paths(
    State(table): State<Arc<RedirectTable>>,
    request: Request,
    next: Next,
) -> Response {
    let uri = request.uri();
    let Some(destination) = table.resolve(uri.path()) else {
        return next.run(request).await;
    };

    let location = match uri.query() {
        Some(query) if destination.contains('?') => format!("{destination}&{query}"),
        Some(query) => format!("{destination}?{query}"),
        None => destination.to_string(),
    };
    debug!(from = %uri.path(), to = %location, "legacy redirect");

    match HeaderValue::from_str(&location) {
        Ok(value) => (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, value)]).into_response(),
        Err(_) => next.run(request).await,
    }
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}

/// Install the 404 fallback and wrap every route, fallback included, with the redirect table.
pub fn with_legacy_redirects(router: Router, table: Arc<RedirectTable>) -> Router {
    router
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(table, redirect_legacy_paths))
}

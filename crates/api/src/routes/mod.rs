pub mod bills;
pub mod health;

use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;
use billed_core::routes::Route;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::state::AppState;
use crate::views;

/// Build the full application router with its middleware stack.
///
/// Route hierarchy:
///
/// ```text
/// /                        redirect to the bills list
/// /health                  JSON health check
/// /employee/bills          bills list
/// /employee/bill/new       new-bill form (GET) and submission (POST)
/// /images/{name}           uploaded receipts
/// ```
///
/// A page path with a trailing slash is redirected to the page. Anything
/// else renders the error page with "Erreur 404".
pub fn build_app(state: AppState) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");
    let timeout = Duration::from_secs(state.config.request_timeout_secs);
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(|| async { Redirect::to(Route::Bills.path()) }))
        .merge(health::router())
        .merge(bills::router())
        .fallback(not_found)
        // -- Middleware stack (applied bottom-up) --
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(state)
}

async fn not_found(uri: Uri) -> Response {
    if let Some(route) = Route::from_pathname(uri.path()) {
        return Redirect::permanent(route.path()).into_response();
    }
    tracing::debug!(path = %uri.path(), "No route for path");
    (
        StatusCode::NOT_FOUND,
        Html(views::error_page::render("Erreur 404")),
    )
        .into_response()
}

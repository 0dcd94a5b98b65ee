pub mod api;
pub mod errors;
pub mod registry;
pub mod seed;

use std::sync::Arc;

use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use registry::ActivityRegistry;

/// Shared application state. Each instance owns its own registry, so tests
/// can build isolated servers instead of sharing process globals.
pub struct AppState {
    pub registry: ActivityRegistry,
}

/// Build the full application router around the given state.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // REST API
        .route("/activities", get(api::list_activities))
        .route(
            "/activities/:name/signup",
            post(api::signup).delete(api::unregister),
        )
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Static frontend
        .route("/", get(|| async { Redirect::to("/static/index.html") }))
        .nest_service("/static", ServeDir::new("static"))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

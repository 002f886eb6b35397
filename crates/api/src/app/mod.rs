//! HTTP API application wiring (Axum router + service injection).
//!
//! - `routes/`: route table + handlers (one file per resource)
//! - `errors.rs`: consistent JSON error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use projectmgr_projects::ProjectService;

use crate::middleware;

pub mod errors;
pub mod routes;

/// The project service as injected into handlers.
pub type SharedProjectService = Arc<dyn ProjectService>;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(jwt_secret: String, projects: SharedProjectService) -> Router {
    let jwt = Arc::new(projectmgr_auth::Hs256JwtValidator::new(jwt_secret.into_bytes()));
    let auth_state = middleware::AuthState { jwt };

    // Protected routes: authentication first, then the per-route access guard.
    let protected = routes::router(routes::projects::route_table())
        .layer(Extension(projects))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

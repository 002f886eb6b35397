//! Per-route authorization guard.
//!
//! Runs after the auth middleware and before the handler body, so a denied
//! request never reaches the project service.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use projectmgr_auth::{Access, authorize};

use crate::app::errors;
use crate::context::PrincipalContext;

pub async fn require_access(
    State(access): State<Access>,
    req: Request,
    next: Next,
) -> Response {
    let Some(principal) = req.extensions().get::<PrincipalContext>() else {
        return errors::json_error(StatusCode::UNAUTHORIZED, "unauthorized", "not authenticated");
    };

    if let Err(e) = authorize(principal.roles(), &access) {
        tracing::warn!(
            principal_id = %principal.principal_id(),
            required = %access,
            path = %req.uri().path(),
            "access denied"
        );
        return errors::json_error(StatusCode::FORBIDDEN, "forbidden", e.to_string());
    }

    next.run(req).await
}

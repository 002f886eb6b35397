use axum::{Json, extract::rejection::JsonRejection, http::StatusCode, response::Response};

use projectmgr_core::ProjectId;

use crate::app::errors;

pub fn parse_project_id(raw: &str) -> Result<ProjectId, Response> {
    raw.parse::<ProjectId>().map_err(|e| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", e.to_string())
    })
}

/// Unwrap a JSON body, turning axum's plain-text rejection into a JSON error
/// that keeps the rejection's status.
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    body.map(|Json(value)| value).map_err(|rejection| {
        errors::json_error(rejection.status(), "invalid_body", rejection.body_text())
    })
}

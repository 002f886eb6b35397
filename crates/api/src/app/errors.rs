use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use projectmgr_projects::ProjectServiceError;

pub fn service_error_to_response(err: ProjectServiceError) -> axum::response::Response {
    match err {
        ProjectServiceError::Validation(msg) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
        ProjectServiceError::Storage(msg) => {
            tracing::error!("project service failure: {msg}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "storage_error", msg)
        }
    }
}

pub fn not_found(message: &'static str) -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "not_found", message)
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

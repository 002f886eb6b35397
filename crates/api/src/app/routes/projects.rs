//! `/projects` resource: route table and handlers.
//!
//! Each handler makes exactly one call on the injected `ProjectService` and
//! maps the outcome to a status code; access checks run before the handler.

use axum::{
    Json,
    extract::{Extension, Path, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use projectmgr_auth::Access;
use projectmgr_projects::{NewProject, ProjectUpdate};

use crate::app::SharedProjectService;
use crate::app::errors;
use crate::app::routes::RouteDef;
use crate::app::routes::common::{json_body, parse_project_id};

pub const COLLECTION: &str = "/projects";
pub const ITEM: &str = "/projects/:id";
pub const REPORTS: &str = "/projects/reports";

pub fn route_table() -> Vec<RouteDef> {
    vec![
        RouteDef::get(COLLECTION, Access::Authenticated, list_projects),
        RouteDef::get(ITEM, Access::Authenticated, get_project),
        RouteDef::post(COLLECTION, Access::admin(), create_project),
        RouteDef::put(ITEM, Access::admin(), update_project),
        RouteDef::delete(ITEM, Access::admin(), delete_project),
        RouteDef::get(REPORTS, Access::admin(), project_task_report),
    ]
}

/// Canonical location of a project resource.
pub fn project_location(id: impl core::fmt::Display) -> String {
    format!("{COLLECTION}/{id}")
}

pub async fn list_projects(Extension(projects): Extension<SharedProjectService>) -> Response {
    match projects.list_projects().await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn get_project(
    Extension(projects): Extension<SharedProjectService>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_project_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match projects.get_project(id).await {
        Ok(Some(project)) => (StatusCode::OK, Json(project)).into_response(),
        Ok(None) => errors::not_found("project not found"),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn create_project(
    Extension(projects): Extension<SharedProjectService>,
    body: Result<Json<NewProject>, JsonRejection>,
) -> Response {
    let body = match json_body(body) {
        Ok(body) => body,
        Err(resp) => return resp,
    };

    let project = match projects.create_project(body).await {
        Ok(p) => p,
        Err(e) => return errors::service_error_to_response(e),
    };

    tracing::info!(project_id = %project.id, "project created");

    (
        StatusCode::CREATED,
        [(header::LOCATION, project_location(project.id))],
        Json(project),
    )
        .into_response()
}

pub async fn update_project(
    Extension(projects): Extension<SharedProjectService>,
    Path(id): Path<String>,
    body: Result<Json<ProjectUpdate>, JsonRejection>,
) -> Response {
    let id = match parse_project_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let body = match json_body(body) {
        Ok(body) => body,
        Err(resp) => return resp,
    };

    match projects.update_project(id, body).await {
        Ok(Some(project)) => {
            tracing::info!(project_id = %id, "project updated");
            (StatusCode::OK, Json(project)).into_response()
        }
        Ok(None) => errors::not_found("project not found"),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn delete_project(
    Extension(projects): Extension<SharedProjectService>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_project_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match projects.delete_project(id).await {
        Ok(true) => {
            tracing::info!(project_id = %id, "project deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Ok(false) => errors::not_found("project not found"),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn project_task_report(Extension(projects): Extension<SharedProjectService>) -> Response {
    match projects.project_task_report().await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{Router, body::Body, http::Method, http::Request};
    use projectmgr_auth::{PrincipalId, Role};
    use projectmgr_core::ProjectId;
    use projectmgr_infra::projects::InMemoryProjectService;
    use tower::ServiceExt;

    use crate::app::routes;
    use crate::context::PrincipalContext;

    fn app() -> Router {
        let projects: SharedProjectService = Arc::new(InMemoryProjectService::new());
        routes::router(route_table()).layer(Extension(projects))
    }

    async fn send(method: Method, uri: &str, roles: Vec<Role>, body: Option<&str>) -> StatusCode {
        let mut req = Request::builder()
            .method(method)
            .uri(uri)
            .extension(PrincipalContext::new(PrincipalId::new(), roles));
        if body.is_some() {
            req = req.header(header::CONTENT_TYPE, "application/json");
        }
        let req = req
            .body(body.map(|b| Body::from(b.to_owned())).unwrap_or_else(Body::empty))
            .unwrap();
        app().oneshot(req).await.unwrap().status()
    }

    fn item_uri() -> String {
        project_location(ProjectId::new())
    }

    #[test]
    fn table_registers_six_routes() {
        assert_eq!(route_table().len(), 6);
    }

    #[tokio::test]
    async fn every_declared_method_is_served_on_its_path() {
        for def in route_table() {
            let uri = def.path().replace(":id", &ProjectId::new().to_string());
            let status = send(def.method().clone(), &uri, vec![Role::admin()], None).await;
            assert_ne!(status, StatusCode::METHOD_NOT_ALLOWED, "{} {}", def.method(), def.path());
        }
    }

    #[tokio::test]
    async fn reads_require_authentication_only() {
        assert_eq!(send(Method::GET, COLLECTION, vec![], None).await, StatusCode::OK);
        assert_eq!(send(Method::GET, &item_uri(), vec![], None).await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn mutations_and_reports_reject_non_admins() {
        let body = Some(r#"{"name":"Apollo","start_date":"2024-01-01"}"#);
        assert_eq!(send(Method::POST, COLLECTION, vec![], body).await, StatusCode::FORBIDDEN);
        assert_eq!(send(Method::PUT, &item_uri(), vec![], body).await, StatusCode::FORBIDDEN);
        assert_eq!(send(Method::DELETE, &item_uri(), vec![], None).await, StatusCode::FORBIDDEN);
        assert_eq!(send(Method::GET, REPORTS, vec![], None).await, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn admins_reach_mutation_and_report_handlers() {
        let admin = || vec![Role::admin()];
        let body = Some(r#"{"name":"Apollo","start_date":"2024-01-01"}"#);
        assert_eq!(send(Method::POST, COLLECTION, admin(), body).await, StatusCode::CREATED);
        assert_eq!(send(Method::DELETE, &item_uri(), admin(), None).await, StatusCode::NOT_FOUND);
        assert_eq!(send(Method::GET, REPORTS, admin(), None).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn undeclared_methods_are_not_allowed() {
        let admin = || vec![Role::admin()];
        assert_eq!(
            send(Method::PATCH, &item_uri(), admin(), None).await,
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            send(Method::DELETE, COLLECTION, admin(), None).await,
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            send(Method::POST, REPORTS, admin(), None).await,
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn location_points_at_item() {
        assert_eq!(project_location("abc"), "/projects/abc");
    }
}

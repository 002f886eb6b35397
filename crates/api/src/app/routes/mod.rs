use axum::{
    Router,
    handler::Handler,
    http::Method,
    routing::{MethodFilter, MethodRouter, on},
};

use projectmgr_auth::Access;

use crate::authz;

pub mod common;
pub mod projects;
pub mod system;

/// One entry of a route-registration table.
///
/// The declared method is the one the handler is registered under; the
/// constructors keep the two in lockstep.
pub struct RouteDef {
    method: Method,
    path: &'static str,
    access: Access,
    handler: MethodRouter,
}

impl RouteDef {
    pub fn get<H, T>(path: &'static str, access: Access, handler: H) -> Self
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        Self::bind(Method::GET, MethodFilter::GET, path, access, handler)
    }

    pub fn post<H, T>(path: &'static str, access: Access, handler: H) -> Self
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        Self::bind(Method::POST, MethodFilter::POST, path, access, handler)
    }

    pub fn put<H, T>(path: &'static str, access: Access, handler: H) -> Self
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        Self::bind(Method::PUT, MethodFilter::PUT, path, access, handler)
    }

    pub fn delete<H, T>(path: &'static str, access: Access, handler: H) -> Self
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        Self::bind(Method::DELETE, MethodFilter::DELETE, path, access, handler)
    }

    fn bind<H, T>(
        method: Method,
        filter: MethodFilter,
        path: &'static str,
        access: Access,
        handler: H,
    ) -> Self
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        Self {
            method,
            path,
            access,
            handler: on(filter, handler),
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn access(&self) -> &Access {
        &self.access
    }
}

/// Build a router from a registration table.
///
/// Each handler gets its own access guard, so two methods on the same path
/// can require different roles.
pub fn router(table: Vec<RouteDef>) -> Router {
    table.into_iter().fold(Router::new(), |router, def| {
        tracing::debug!(
            method = %def.method,
            path = def.path,
            access = %def.access,
            "route registered"
        );

        let guarded = def.handler.route_layer(axum::middleware::from_fn_with_state(
            def.access,
            authz::require_access,
        ));
        router.route(def.path, guarded)
    })
}

//! HTTP API: routing, authorization guards and response mapping over an
//! injected `ProjectService`.

pub mod app;
pub mod authz;
pub mod config;
pub mod context;
pub mod middleware;

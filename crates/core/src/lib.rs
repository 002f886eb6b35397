//! `projectmgr-core` — shared domain building blocks.
//!
//! Identifiers and the domain error model. No infrastructure concerns.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ProjectId, TaskId};

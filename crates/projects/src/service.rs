//! The service contract consumed by the HTTP layer.
//!
//! Every lookup distinguishes three outcomes: found, not found (`None` /
//! `false`) and failure (`Err`).

use async_trait::async_trait;
use thiserror::Error;

use projectmgr_core::{DomainError, ProjectId};

use crate::{NewProject, Project, ProjectUpdate, TaskReport};

pub type ProjectServiceResult<T> = Result<T, ProjectServiceError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProjectServiceError {
    /// The payload was rejected; nothing was stored.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The backing store could not serve the request.
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<DomainError> for ProjectServiceError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::InvalidId(msg) => Self::Validation(msg),
        }
    }
}

/// Business operations over projects.
#[async_trait]
pub trait ProjectService: Send + Sync {
    async fn list_projects(&self) -> ProjectServiceResult<Vec<Project>>;

    async fn get_project(&self, id: ProjectId) -> ProjectServiceResult<Option<Project>>;

    async fn create_project(&self, input: NewProject) -> ProjectServiceResult<Project>;

    /// `Ok(None)` when no project has this id; the store is left untouched.
    async fn update_project(
        &self,
        id: ProjectId,
        input: ProjectUpdate,
    ) -> ProjectServiceResult<Option<Project>>;

    /// `Ok(true)` when a project was removed.
    async fn delete_project(&self, id: ProjectId) -> ProjectServiceResult<bool>;

    async fn project_task_report(&self) -> ProjectServiceResult<TaskReport>;
}

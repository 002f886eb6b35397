use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use projectmgr_core::{Entity, ProjectId};
use projectmgr_projects::{
    NewProject, Project, ProjectService, ProjectServiceError, ProjectServiceResult, ProjectUpdate,
    TaskReport,
};

/// In-memory project store for tests/dev.
///
/// Guards are never held across an `.await`.
#[derive(Debug, Default)]
pub struct InMemoryProjectService {
    inner: RwLock<HashMap<ProjectId, Project>>,
}

impl InMemoryProjectService {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> ProjectServiceError {
    ProjectServiceError::Storage("project store lock poisoned".to_string())
}

#[async_trait]
impl ProjectService for InMemoryProjectService {
    async fn list_projects(&self) -> ProjectServiceResult<Vec<Project>> {
        let map = self.inner.read().map_err(poisoned)?;
        let mut projects: Vec<Project> = map.values().cloned().collect();
        projects.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(projects)
    }

    async fn get_project(&self, id: ProjectId) -> ProjectServiceResult<Option<Project>> {
        let map = self.inner.read().map_err(poisoned)?;
        Ok(map.get(&id).cloned())
    }

    async fn create_project(&self, input: NewProject) -> ProjectServiceResult<Project> {
        let project = Project::create(input, Utc::now())?;

        let mut map = self.inner.write().map_err(poisoned)?;
        map.insert(project.id(), project.clone());
        tracing::debug!(project_id = %project.id, tasks = project.tasks.len(), "project stored");
        Ok(project)
    }

    async fn update_project(
        &self,
        id: ProjectId,
        input: ProjectUpdate,
    ) -> ProjectServiceResult<Option<Project>> {
        let mut map = self.inner.write().map_err(poisoned)?;
        let Some(current) = map.get(&id) else {
            return Ok(None);
        };

        let next = current.updated(input, Utc::now())?;
        map.insert(id, next.clone());
        Ok(Some(next))
    }

    async fn delete_project(&self, id: ProjectId) -> ProjectServiceResult<bool> {
        let mut map = self.inner.write().map_err(poisoned)?;
        Ok(map.remove(&id).is_some())
    }

    async fn project_task_report(&self) -> ProjectServiceResult<TaskReport> {
        let map = self.inner.read().map_err(poisoned)?;
        Ok(TaskReport::from_projects(map.values(), Utc::now()))
    }
}

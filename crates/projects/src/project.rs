use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use projectmgr_core::{DomainError, DomainResult, Entity, ProjectId, TaskId};

/// Longest accepted project name, in characters.
pub const MAX_NAME_LEN: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub status: TaskStatus,
}

/// A project as stored by the service and returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub tasks: Vec<Task>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Project {
    type Id = ProjectId;

    fn id(&self) -> ProjectId {
        self.id
    }
}

impl Project {
    /// Build a new project from a validated creation payload.
    pub fn create(input: NewProject, now: DateTime<Utc>) -> DomainResult<Self> {
        input.validate()?;

        let tasks = input
            .tasks
            .into_iter()
            .map(|t| Task {
                id: TaskId::new(),
                title: t.title.trim().to_string(),
                status: t.status,
            })
            .collect();

        Ok(Self {
            id: ProjectId::new(),
            name: input.name.trim().to_string(),
            description: input.description,
            start_date: input.start_date,
            end_date: input.end_date,
            tasks,
            created_at: now,
            updated_at: now,
        })
    }

    /// Return a copy of this project with `update` merged in.
    ///
    /// `self` is left untouched when the merged result is invalid.
    pub fn updated(&self, update: ProjectUpdate, now: DateTime<Utc>) -> DomainResult<Self> {
        let mut next = self.clone();
        if let Some(name) = update.name {
            next.name = name.trim().to_string();
        }
        if let Some(description) = update.description {
            next.description = Some(description);
        }
        if let Some(start_date) = update.start_date {
            next.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            next.end_date = Some(end_date);
        }

        validate_name(&next.name)?;
        validate_dates(next.start_date, next.end_date)?;

        next.updated_at = now;
        Ok(next)
    }

    pub fn completed_task_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Done)
            .count()
    }
}

/// Creation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub tasks: Vec<NewTask>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub status: TaskStatus,
}

impl NewProject {
    pub fn validate(&self) -> DomainResult<()> {
        validate_name(&self.name)?;
        validate_dates(self.start_date, self.end_date)?;
        if self.tasks.iter().any(|t| t.title.trim().is_empty()) {
            return Err(DomainError::validation("task title cannot be empty"));
        }
        Ok(())
    }
}

/// Partial update payload: absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

fn validate_name(name: &str) -> DomainResult<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::validation("project name cannot be empty"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(DomainError::validation(format!(
            "project name cannot exceed {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_dates(start: NaiveDate, end: Option<NaiveDate>) -> DomainResult<()> {
    match end {
        Some(end) if end < start => Err(DomainError::validation(
            "end_date cannot be before start_date",
        )),
        _ => Ok(()),
    }
}

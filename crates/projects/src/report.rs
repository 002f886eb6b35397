use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use projectmgr_core::ProjectId;

use crate::Project;

/// Task counts for a single project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTaskCount {
    pub project_id: ProjectId,
    pub project_name: String,
    pub task_count: usize,
    pub completed_task_count: usize,
}

/// Aggregate "tasks per project" report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskReport {
    pub generated_at: DateTime<Utc>,
    pub total_projects: usize,
    pub total_tasks: usize,
    pub projects: Vec<ProjectTaskCount>,
}

impl TaskReport {
    /// Build the report. Rows are ordered by task count (descending), then
    /// project name.
    pub fn from_projects<'a>(
        projects: impl IntoIterator<Item = &'a Project>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let mut rows: Vec<ProjectTaskCount> = projects
            .into_iter()
            .map(|p| ProjectTaskCount {
                project_id: p.id,
                project_name: p.name.clone(),
                task_count: p.tasks.len(),
                completed_task_count: p.completed_task_count(),
            })
            .collect();

        rows.sort_by(|a, b| {
            b.task_count
                .cmp(&a.task_count)
                .then_with(|| a.project_name.cmp(&b.project_name))
        });

        Self {
            generated_at,
            total_projects: rows.len(),
            total_tasks: rows.iter().map(|r| r.task_count).sum(),
            projects: rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NewProject, NewTask, TaskStatus};
    use chrono::NaiveDate;

    fn project(name: &str, tasks: &[TaskStatus]) -> Project {
        let input = NewProject {
            name: name.to_string(),
            description: None,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: None,
            tasks: tasks
                .iter()
                .enumerate()
                .map(|(i, s)| NewTask { title: format!("task {i}"), status: *s })
                .collect(),
        };
        Project::create(input, Utc::now()).unwrap()
    }

    #[test]
    fn empty_store_yields_empty_report() {
        let report = TaskReport::from_projects(std::iter::empty(), Utc::now());
        assert_eq!(report.total_projects, 0);
        assert_eq!(report.total_tasks, 0);
        assert!(report.projects.is_empty());
    }

    #[test]
    fn rows_sorted_by_task_count_then_name() {
        let projects = vec![
            project("Beta", &[TaskStatus::Todo]),
            project("Gamma", &[TaskStatus::Done, TaskStatus::Done, TaskStatus::InProgress]),
            project("Alpha", &[TaskStatus::Done]),
            project("Delta", &[]),
        ];

        let report = TaskReport::from_projects(&projects, Utc::now());
        let names: Vec<_> = report.projects.iter().map(|r| r.project_name.as_str()).collect();
        assert_eq!(names, vec!["Gamma", "Alpha", "Beta", "Delta"]);

        assert_eq!(report.total_projects, 4);
        assert_eq!(report.total_tasks, 5);
        assert_eq!(report.projects[0].completed_task_count, 2);
    }
}

//! `projectmgr-projects` — project domain model and the service contract the
//! HTTP layer is written against.

pub mod project;
pub mod report;
pub mod service;

pub use project::{NewProject, NewTask, Project, ProjectUpdate, Task, TaskStatus};
pub use report::{ProjectTaskCount, TaskReport};
pub use service::{ProjectService, ProjectServiceError, ProjectServiceResult};

use serde::Deserialize;

use crate::task::{parse_deadline, TaskChanges};
use crate::task_error::TaskError;
use crate::task_status::TaskStatus;

/// Raw partial-update body. Absent fields stay untouched on the task;
/// supplied fields must individually pass validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<String>,
    pub status: Option<String>,
}

impl UpdateTaskRequest {
    pub fn into_changes(self) -> Result<TaskChanges, TaskError> {
        let title = match self.title {
            Some(value) if value.trim().is_empty() => {
                return Err(TaskError::validation("Title cannot be empty"))
            }
            other => other,
        };
        let description = match self.description {
            Some(value) if value.trim().is_empty() => {
                return Err(TaskError::validation("Description cannot be empty"))
            }
            other => other,
        };
        let status = match self.status {
            Some(raw) => Some(raw.parse::<TaskStatus>()?),
            None => None,
        };
        let deadline = match self.deadline {
            Some(raw) => Some(parse_deadline(&raw)?),
            None => None,
        };

        Ok(TaskChanges {
            title,
            description,
            deadline,
            status,
        })
    }
}

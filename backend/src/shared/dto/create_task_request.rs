use serde::Deserialize;

use crate::task::{parse_deadline, TaskDraft};
use crate::task_error::TaskError;
use crate::task_status::TaskStatus;

/// Raw create body as it arrives. Fields are all optional at the serde layer
/// so presence checks answer with 400 instead of a deserialization reject;
/// unknown fields are refused outright.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<String>,
    pub status: Option<String>,
}

impl CreateTaskRequest {
    pub fn into_draft(self) -> Result<TaskDraft, TaskError> {
        let title = required_text(self.title)?;
        let description = required_text(self.description)?;
        let deadline_text = required_text(self.deadline)?;

        let status = match self.status {
            Some(raw) => raw.parse::<TaskStatus>()?,
            None => TaskStatus::default(),
        };
        let deadline = parse_deadline(&deadline_text)?;

        Ok(TaskDraft {
            title,
            description,
            deadline,
            status,
        })
    }
}

fn required_text(field: Option<String>) -> Result<String, TaskError> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(TaskError::validation(
            "Title, description, and deadline are required",
        )),
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::task_error::TaskError;

/// Lifecycle of a task. The wire spelling of the middle variant carries a
/// space, so requests and stored documents both say "In Progress".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum TaskStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

// Single validator for status text arriving in request bodies. Both the
// create and update paths go through here.
impl FromStr for TaskStatus {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(TaskStatus::Pending),
            "In Progress" => Ok(TaskStatus::InProgress),
            "Completed" => Ok(TaskStatus::Completed),
            _ => Err(TaskError::validation("Invalid status value")),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        };
        write!(f, "{text}")
    }
}

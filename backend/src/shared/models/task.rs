use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::task_error::TaskError;
use crate::task_status::TaskStatus;

/// Deadline text format accepted on the wire: day-month-year, e.g. "25-12-2025".
pub const DEADLINE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub deadline: DateTime<Utc>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fully validated input for a new task. Produced by
/// `CreateTaskRequest::into_draft`, never built from raw request text.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub deadline: DateTime<Utc>,
    pub status: TaskStatus,
}

/// Validated partial update. `None` means "leave the field as it is".
#[derive(Debug, Clone, Default)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub status: Option<TaskStatus>,
}

impl Task {
    pub fn new(draft: TaskDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            deadline: draft.deadline,
            status: draft.status,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn edit(self, changes: TaskChanges) -> Self {
        Self {
            id: self.id,
            title: changes.title.unwrap_or(self.title),
            description: changes.description.unwrap_or(self.description),
            deadline: changes.deadline.unwrap_or(self.deadline),
            status: changes.status.unwrap_or(self.status),
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }
}

/// Normalizes deadline text to midnight UTC of the named calendar day, so
/// the store never holds a malformed date.
pub fn parse_deadline(raw: &str) -> Result<DateTime<Utc>, TaskError> {
    let date = NaiveDate::parse_from_str(raw.trim(), DEADLINE_FORMAT)
        .map_err(|_| TaskError::validation("Invalid deadline date format, use DD-MM-YYYY"))?;
    date.and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| TaskError::validation("Invalid deadline date format, use DD-MM-YYYY"))
}

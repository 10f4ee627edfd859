use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task status as the service spells it on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

/// A task as returned by the service. Deadlines and timestamps arrive as
/// RFC 3339 UTC datetimes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub deadline: DateTime<Utc>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for the create operation. `deadline` stays text in DD-MM-YYYY form;
/// the service owns parsing and rejection.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTaskInput {
    pub title: String,
    pub description: String,
    pub deadline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

/// Partial update body. Absent fields are left out of the JSON entirely so
/// the service treats them as "unchanged".
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTaskInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_input_omits_absent_fields() {
        let body = UpdateTaskInput {
            status: Some(TaskStatus::Completed),
            ..UpdateTaskInput::default()
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"status":"Completed"}"#);
    }

    #[test]
    fn create_input_spells_status_like_the_service() {
        let body = CreateTaskInput {
            title: "A".to_string(),
            description: "B".to_string(),
            deadline: "01-01-2030".to_string(),
            status: Some(TaskStatus::InProgress),
        };
        let json: serde_json::Value = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], "In Progress");
    }
}

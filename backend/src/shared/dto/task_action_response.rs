use serde::Serialize;

use crate::task::Task;

#[derive(Debug, Serialize)]
pub struct TaskActionResponse {
    pub message: String,
    pub task: Task,
}

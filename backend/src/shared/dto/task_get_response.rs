use serde::Serialize;

use crate::task::Task;

#[derive(Debug, Serialize)]
pub struct TaskGetResponse {
    pub task: Task,
}

use uuid::Uuid;

use crate::model::Task;

/// Outcome of one service operation, fed to the reducer. `Begin` and `Fail`
/// are shared by all five operations; the transition they apply is the same
/// everywhere.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskEvent {
    Begin,
    CreateOk(Task),
    ListOk(Vec<Task>),
    FetchOk(Task),
    UpdateOk(Task),
    DeleteOk(Uuid),
    Fail(String),
}

/// Session-local mirror of the service's view of tasks. Rebuilt empty on
/// every session; never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskState {
    pub tasks: Vec<Task>,
    pub selected_task: Option<Task>,
    pub loading: bool,
    pub error: Option<String>,
}

impl TaskState {
    /// The single reducer. Every terminal event clears `loading`; `Fail`
    /// records the message and leaves all task data as it was.
    pub fn apply(&mut self, event: TaskEvent) {
        match event {
            TaskEvent::Begin => {
                self.loading = true;
                self.error = None;
            }
            TaskEvent::CreateOk(task) => {
                self.loading = false;
                self.tasks.push(task);
            }
            TaskEvent::ListOk(tasks) => {
                self.loading = false;
                self.tasks = tasks;
            }
            TaskEvent::FetchOk(task) => {
                self.loading = false;
                self.selected_task = Some(task);
            }
            TaskEvent::UpdateOk(task) => {
                self.loading = false;
                // No matching entry means the list is stale; it stays
                // stale until the next full fetch.
                if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) {
                    *slot = task;
                }
            }
            TaskEvent::DeleteOk(id) => {
                self.loading = false;
                self.tasks.retain(|t| t.id != id);
            }
            TaskEvent::Fail(message) => {
                self.loading = false;
                self.error = Some(message);
            }
        }
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn clear_selected_task(&mut self) {
        self.selected_task = None;
    }
}

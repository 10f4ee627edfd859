use uuid::Uuid;

use crate::api::{ApiResult, TaskApi};
use crate::model::{CreateTaskInput, UpdateTaskInput};
use crate::state::{TaskEvent, TaskState};

/// Session-scoped container the UI drives. Each operation runs the same
/// three-phase contract: mark `Begin`, call the service, settle with the
/// operation's success event or a `Fail`. Operations borrow the store
/// mutably for their whole span, so one store never interleaves two calls;
/// there is no cancellation and no retry.
pub struct TaskStore {
    api: TaskApi,
    state: TaskState,
}

impl TaskStore {
    pub fn new(api: TaskApi) -> Self {
        Self {
            api,
            state: TaskState::default(),
        }
    }

    pub fn state(&self) -> &TaskState {
        &self.state
    }

    pub async fn create_task(&mut self, input: CreateTaskInput) {
        self.state.apply(TaskEvent::Begin);
        let outcome = self.api.create_task(&input).await;
        self.settle(outcome.map(TaskEvent::CreateOk));
    }

    pub async fn load_tasks(&mut self) {
        self.state.apply(TaskEvent::Begin);
        let outcome = self.api.get_all_tasks().await;
        self.settle(outcome.map(TaskEvent::ListOk));
    }

    pub async fn load_task(&mut self, id: Uuid) {
        self.state.apply(TaskEvent::Begin);
        let outcome = self.api.get_single_task(id).await;
        self.settle(outcome.map(TaskEvent::FetchOk));
    }

    pub async fn update_task(&mut self, id: Uuid, input: UpdateTaskInput) {
        self.state.apply(TaskEvent::Begin);
        let outcome = self.api.update_task(id, &input).await;
        self.settle(outcome.map(TaskEvent::UpdateOk));
    }

    pub async fn delete_task(&mut self, id: Uuid) {
        self.state.apply(TaskEvent::Begin);
        let outcome = self.api.delete_task(id).await;
        self.settle(outcome.map(TaskEvent::DeleteOk));
    }

    pub fn clear_error(&mut self) {
        self.state.clear_error();
    }

    pub fn clear_selected_task(&mut self) {
        self.state.clear_selected_task();
    }

    // Single dispatch-result handler: every operation funnels its tagged
    // outcome through here.
    fn settle(&mut self, outcome: ApiResult<TaskEvent>) {
        match outcome {
            Ok(event) => self.state.apply(event),
            Err(error) => self.state.apply(TaskEvent::Fail(error.to_string())),
        }
    }
}

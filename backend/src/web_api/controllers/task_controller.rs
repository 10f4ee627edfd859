use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::error;
use uuid::Uuid;

use crate::{
    app_state::SharedState, create_task_request::CreateTaskRequest,
    message_response::MessageResponse, task::Task, task_action_response::TaskActionResponse,
    task_error::TaskError, task_get_response::TaskGetResponse,
    task_list_response::TaskListResponse, update_task_request::UpdateTaskRequest,
};

pub struct TaskController {}

impl TaskController {
    pub async fn create(
        State(state): State<SharedState>,
        Json(body): Json<CreateTaskRequest>,
    ) -> Result<(StatusCode, Json<TaskActionResponse>), TaskError> {
        let draft = body.into_draft()?;
        let task = Task::new(draft);
        state.data_context.create_task(&task).map_err(|e| {
            error!("task store rejected insert: {e}");
            TaskError::store("Server error while creating task")
        })?;
        Ok((
            StatusCode::CREATED,
            Json(TaskActionResponse {
                message: "Task created successfully".to_string(),
                task,
            }),
        ))
    }

    pub async fn get_all(
        State(state): State<SharedState>,
    ) -> Result<Json<TaskListResponse>, TaskError> {
        let tasks = state.data_context.list_tasks().map_err(|e| {
            error!("task store rejected scan: {e}");
            TaskError::store("Server error while getting all tasks")
        })?;
        Ok(Json(TaskListResponse { tasks }))
    }

    pub async fn get_single(
        State(state): State<SharedState>,
        Path(id): Path<Uuid>,
    ) -> Result<Json<TaskGetResponse>, TaskError> {
        let task = state
            .data_context
            .get_task(id)
            .map_err(|e| {
                error!("task store rejected lookup of {id}: {e}");
                TaskError::store("Server error while getting task")
            })?
            .ok_or_else(TaskError::not_found)?;
        Ok(Json(TaskGetResponse { task }))
    }

    pub async fn update(
        State(state): State<SharedState>,
        Path(id): Path<Uuid>,
        Json(body): Json<UpdateTaskRequest>,
    ) -> Result<Json<TaskActionResponse>, TaskError> {
        // Field validation happens before the existence check, so a body
        // that is both malformed and aimed at a missing id answers 400.
        let changes = body.into_changes()?;
        let task = state
            .data_context
            .get_task(id)
            .map_err(|e| {
                error!("task store rejected lookup of {id}: {e}");
                TaskError::store("Server error while updating task")
            })?
            .ok_or_else(TaskError::not_found)?;

        let updated = task.edit(changes);
        state.data_context.update_task(&updated).map_err(|e| {
            error!("task store rejected update of {id}: {e}");
            TaskError::store("Server error while updating task")
        })?;
        Ok(Json(TaskActionResponse {
            message: "Task updated successfully".to_string(),
            task: updated,
        }))
    }

    pub async fn delete(
        State(state): State<SharedState>,
        Path(id): Path<Uuid>,
    ) -> Result<Json<MessageResponse>, TaskError> {
        let deleted = state.data_context.delete_task(id).map_err(|e| {
            error!("task store rejected delete of {id}: {e}");
            TaskError::store("Server error while deleting task")
        })?;
        if !deleted {
            return Err(TaskError::not_found());
        }
        Ok(Json(MessageResponse {
            message: "Task deleted successfully".to_string(),
        }))
    }
}

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::model::{CreateTaskInput, Task, UpdateTaskInput};

/// Why a service call produced no payload: the request never completed, or
/// the service answered with an error status and a `{message}` body.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{message}")]
    Api { status: StatusCode, message: String },
}

pub type ApiResult<T> = Result<T, ClientError>;

// Wire envelopes, mirroring the service's response DTOs.
#[derive(Debug, Deserialize)]
struct TaskEnvelope {
    task: Task,
}

#[derive(Debug, Deserialize)]
struct TaskListEnvelope {
    tasks: Vec<Task>,
}

#[derive(Debug, Deserialize)]
struct MessageEnvelope {
    message: String,
}

/// Typed HTTP client for the five task operations. Pure request/response:
/// holds no task data, applies no state transitions.
#[derive(Debug, Clone)]
pub struct TaskApi {
    client: Client,
    base_url: String,
}

impl TaskApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn create_task(&self, input: &CreateTaskInput) -> ApiResult<Task> {
        let response = self
            .client
            .post(format!("{}/task/createTask", self.base_url))
            .json(input)
            .send()
            .await?;
        Ok(parse::<TaskEnvelope>(response).await?.task)
    }

    pub async fn get_all_tasks(&self) -> ApiResult<Vec<Task>> {
        let response = self
            .client
            .get(format!("{}/task/getAllTasks", self.base_url))
            .send()
            .await?;
        Ok(parse::<TaskListEnvelope>(response).await?.tasks)
    }

    pub async fn get_single_task(&self, id: Uuid) -> ApiResult<Task> {
        let response = self
            .client
            .get(format!("{}/task/getSingleTask/{id}", self.base_url))
            .send()
            .await?;
        Ok(parse::<TaskEnvelope>(response).await?.task)
    }

    pub async fn update_task(&self, id: Uuid, input: &UpdateTaskInput) -> ApiResult<Task> {
        let response = self
            .client
            .put(format!("{}/task/updateTask/{id}", self.base_url))
            .json(input)
            .send()
            .await?;
        Ok(parse::<TaskEnvelope>(response).await?.task)
    }

    /// Returns the id back so the caller can splice its cache without
    /// holding onto the request.
    pub async fn delete_task(&self, id: Uuid) -> ApiResult<Uuid> {
        let response = self
            .client
            .delete(format!("{}/task/deleteTask/{id}", self.base_url))
            .send()
            .await?;
        parse::<MessageEnvelope>(response).await?;
        Ok(id)
    }
}

async fn parse<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json::<T>().await?)
    } else {
        let message = match response.json::<MessageEnvelope>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request rejected")
                .to_string(),
        };
        Err(ClientError::Api { status, message })
    }
}

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

use taskboard_server::app_state::AppState;
use taskboard_server::data_access::data_context::DataContext;
use taskboard_server::map_routes;

fn temp_store(file_name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("taskboard-{nanos}-{file_name}"))
}

async fn spawn_server(store: &Path) -> String {
    let data_context =
        DataContext::new(store.to_str().unwrap()).expect("failed to open task store");
    let state = Arc::new(AppState { data_context });
    let app = map_routes(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn sample_body() -> Value {
    json!({
        "title": "A",
        "description": "B",
        "deadline": "01-01-2030"
    })
}

#[tokio::test]
async fn health_endpoint_answers_ok() {
    let store = temp_store("health.redb");
    let base = spawn_server(&store).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base}/health/check_status"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    std::fs::remove_file(&store).ok();
}

#[tokio::test]
async fn created_task_defaults_to_pending_and_round_trips() {
    let store = temp_store("create.redb");
    let base = spawn_server(&store).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/task/createTask"))
        .json(&json!({
            "title": "Write report",
            "description": "Quarterly numbers",
            "deadline": "01-06-2026"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Task created successfully");
    assert_eq!(body["task"]["status"], "Pending");
    let id = body["task"]["id"].as_str().unwrap().to_string();

    let response = client
        .get(format!("{base}/task/getSingleTask/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let fetched: Value = response.json().await.unwrap();
    assert_eq!(fetched["task"]["title"], "Write report");
    assert_eq!(fetched["task"]["description"], "Quarterly numbers");
    assert_eq!(fetched["task"]["status"], "Pending");

    // Deadline text normalizes to midnight UTC of that calendar day.
    let deadline: DateTime<Utc> =
        serde_json::from_value(fetched["task"]["deadline"].clone()).unwrap();
    assert_eq!(deadline, Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap());

    std::fs::remove_file(&store).ok();
}

#[tokio::test]
async fn task_lifecycle_create_list_update_delete() {
    let store = temp_store("lifecycle.redb");
    let base = spawn_server(&store).await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(format!("{base}/task/createTask"))
        .json(&sample_body())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["task"]["id"].as_str().unwrap().to_string();

    let listed: Value = client
        .get(format!("{base}/task/getAllTasks"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let tasks = listed["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"].as_str().unwrap(), id);

    let response = client
        .put(format!("{base}/task/updateTask/{id}"))
        .json(&json!({"status": "Completed"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["message"], "Task updated successfully");
    assert_eq!(updated["task"]["status"], "Completed");
    assert_eq!(updated["task"]["title"], "A");
    assert_eq!(updated["task"]["description"], "B");
    assert_eq!(
        updated["task"]["deadline"],
        created["task"]["deadline"],
        "deadline must survive a status-only update"
    );

    let response = client
        .delete(format!("{base}/task/deleteTask/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Task deleted successfully");

    let response = client
        .get(format!("{base}/task/getSingleTask/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    std::fs::remove_file(&store).ok();
}

#[tokio::test]
async fn create_rejects_missing_or_blank_required_fields() {
    let store = temp_store("create-missing.redb");
    let base = spawn_server(&store).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/task/createTask"))
        .json(&json!({"title": "A", "description": "B"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Title, description, and deadline are required");

    let response = client
        .post(format!("{base}/task/createTask"))
        .json(&json!({"title": "  ", "description": "B", "deadline": "01-01-2030"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    std::fs::remove_file(&store).ok();
}

#[tokio::test]
async fn create_rejects_invalid_status_without_mutation() {
    let store = temp_store("create-bad-status.redb");
    let base = spawn_server(&store).await;
    let client = reqwest::Client::new();

    let mut body = sample_body();
    body["status"] = json!("Done");
    let response = client
        .post(format!("{base}/task/createTask"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let answer: Value = response.json().await.unwrap();
    assert_eq!(answer["message"], "Invalid status value");

    let listed: Value = client
        .get(format!("{base}/task/getAllTasks"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listed["tasks"].as_array().unwrap().is_empty());

    std::fs::remove_file(&store).ok();
}

#[tokio::test]
async fn create_rejects_unparsable_deadlines() {
    let store = temp_store("create-bad-deadline.redb");
    let base = spawn_server(&store).await;
    let client = reqwest::Client::new();

    for bad in ["2030-01-01", "June 1st", "31-02-2026"] {
        let mut body = sample_body();
        body["deadline"] = json!(bad);
        let response = client
            .post(format!("{base}/task/createTask"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400, "accepted deadline {bad:?}");
    }

    std::fs::remove_file(&store).ok();
}

#[tokio::test]
async fn missing_ids_answer_not_found() {
    let store = temp_store("missing-id.redb");
    let base = spawn_server(&store).await;
    let client = reqwest::Client::new();
    let ghost = Uuid::new_v4();

    let response = client
        .get(format!("{base}/task/getSingleTask/{ghost}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Task not found");

    let response = client
        .put(format!("{base}/task/updateTask/{ghost}"))
        .json(&json!({"title": "New title"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let response = client
        .delete(format!("{base}/task/deleteTask/{ghost}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    std::fs::remove_file(&store).ok();
}

#[tokio::test]
async fn delete_is_not_idempotent() {
    let store = temp_store("double-delete.redb");
    let base = spawn_server(&store).await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(format!("{base}/task/createTask"))
        .json(&sample_body())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["task"]["id"].as_str().unwrap().to_string();

    let first = client
        .delete(format!("{base}/task/deleteTask/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(first.status(), 200);

    let second = client
        .delete(format!("{base}/task/deleteTask/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), 404);

    std::fs::remove_file(&store).ok();
}

#[tokio::test]
async fn update_changes_only_supplied_fields() {
    let store = temp_store("partial-update.redb");
    let base = spawn_server(&store).await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(format!("{base}/task/createTask"))
        .json(&json!({
            "title": "Write report",
            "description": "Quarterly numbers",
            "deadline": "25-12-2025",
            "status": "In Progress"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["task"]["id"].as_str().unwrap().to_string();

    let updated: Value = client
        .put(format!("{base}/task/updateTask/{id}"))
        .json(&json!({"description": "Final numbers"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["task"]["description"], "Final numbers");
    assert_eq!(updated["task"]["title"], "Write report");
    assert_eq!(updated["task"]["status"], "In Progress");
    assert_eq!(updated["task"]["deadline"], created["task"]["deadline"]);
    assert_eq!(updated["task"]["created_at"], created["task"]["created_at"]);

    std::fs::remove_file(&store).ok();
}

#[tokio::test]
async fn update_rejects_invalid_fields_and_leaves_task_untouched() {
    let store = temp_store("update-bad.redb");
    let base = spawn_server(&store).await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(format!("{base}/task/createTask"))
        .json(&sample_body())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["task"]["id"].as_str().unwrap().to_string();

    let response = client
        .put(format!("{base}/task/updateTask/{id}"))
        .json(&json!({"status": "Archived"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let response = client
        .put(format!("{base}/task/updateTask/{id}"))
        .json(&json!({"deadline": "tomorrow"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let fetched: Value = client
        .get(format!("{base}/task/getSingleTask/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["task"]["status"], "Pending");
    assert_eq!(fetched["task"]["updated_at"], created["task"]["updated_at"]);

    std::fs::remove_file(&store).ok();
}

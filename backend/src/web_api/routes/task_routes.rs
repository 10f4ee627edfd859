use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::{app_state::SharedState, task_controller::TaskController};

pub const ROUTER_PATH: &str = "/task";

pub fn get_router(app_state: SharedState) -> Router {
    Router::new()
        .route(
            format!("{}/createTask", ROUTER_PATH).as_str(),
            post(TaskController::create),
        )
        .route(
            format!("{}/getAllTasks", ROUTER_PATH).as_str(),
            get(TaskController::get_all),
        )
        .route(
            format!("{}/getSingleTask/:id", ROUTER_PATH).as_str(),
            get(TaskController::get_single),
        )
        .route(
            format!("{}/updateTask/:id", ROUTER_PATH).as_str(),
            put(TaskController::update),
        )
        .route(
            format!("{}/deleteTask/:id", ROUTER_PATH).as_str(),
            delete(TaskController::delete),
        )
        .with_state(app_state)
}

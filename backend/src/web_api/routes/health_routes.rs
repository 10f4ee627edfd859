use axum::routing::get;
use axum::Router;

use crate::{app_state::SharedState, health_controller::HealthController};

pub const ROUTER_PATH: &str = "/health";

pub fn get_router(app_state: SharedState) -> Router {
    Router::new()
        .route(
            format!("{}/check_status", ROUTER_PATH).as_str(),
            get(HealthController::get),
        )
        .with_state(app_state)
}

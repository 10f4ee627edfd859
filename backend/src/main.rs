use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use taskboard_server::app_state::{AppState, SharedState};
use taskboard_server::data_access::data_context::DataContext;
use taskboard_server::map_routes;
use taskboard_server::settings::Settings;

#[tokio::main]
async fn main() {
    // ── Logging ────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // ── Settings ───────────────────────────────────────────────
    let settings = Settings::load().expect("Failed to load settings");

    // ── Task store ─────────────────────────────────────────────
    let data_context =
        DataContext::new(&settings.store_path).expect("Failed to open task store");
    let task_count = data_context
        .list_tasks()
        .expect("Failed to scan task store")
        .len();
    info!("Task store ready: {task_count} tasks in {}", settings.store_path);

    // ── Shared state ───────────────────────────────────────────
    let state: SharedState = Arc::new(AppState { data_context });

    // ── Router ─────────────────────────────────────────────────
    let cors = match settings.allowed_origin.as_str() {
        "*" => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        origin => CorsLayer::new()
            .allow_origin(
                origin
                    .parse::<HeaderValue>()
                    .expect("Invalid allowed_origin in settings"),
            )
            .allow_methods(Any)
            .allow_headers(Any),
    };
    let app = map_routes(state).layer(cors);

    // ── Start ──────────────────────────────────────────────────
    let addr: SocketAddr = format!(
        "{}:{}",
        settings.tcp_socket_binding, settings.tcp_socket_port
    )
    .parse()
    .expect("Invalid listen address in settings");
    info!("Server running on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

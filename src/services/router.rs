use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::chat::chat_upgrade;
use super::mocks;
use super::state::AppState;

/// HTTP fixtures, the `/chat` socket, and static files for everything else.
pub fn create_router(state: AppState) -> Router {
    let public = ServeDir::new(&state.config.public_dir);

    Router::new()
        .route("/", get(mocks::root))
        .route("/chat", get(chat_upgrade))
        .route("/login", post(mocks::login))
        .route("/login-success", get(mocks::login_success))
        .route("/logout", post(mocks::logout))
        .route(
            "/repoService/myClasses/:tag_id/runtimeMetrics",
            get(mocks::runtime_metrics),
        )
        .route("/chathistory", get(mocks::chat_history))
        .route("/mocks/:folder/:file", get(mocks::mock_file))
        .fallback_service(public)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

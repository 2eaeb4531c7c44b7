use super::{handlers, state::AppState};
use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Room for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    let upload_limit = app_state.config.max_upload_bytes + MULTIPART_OVERHEAD;

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/sessions", post(handlers::create_session_handler))
        .route(
            "/sessions/{id}",
            get(handlers::get_session_handler).delete(handlers::delete_session_handler),
        )
        .route(
            "/sessions/{id}/document",
            post(handlers::upload_document_handler).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/sessions/{id}/ask", post(handlers::ask_handler))
        .route(
            "/sessions/{id}/history",
            delete(handlers::clear_history_handler),
        )
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}

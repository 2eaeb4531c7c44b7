use super::{find_session, wrap_response, ApiResponse, AppError, AppState, DebugParams};
use crate::types::SessionView;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

/// Starts a new, empty session.
pub async fn create_session_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
) -> (StatusCode, Json<ApiResponse<SessionView>>) {
    let (_, session) = app_state.sessions.create().await;
    let view = SessionView::from(&*session.lock().await);
    (StatusCode::CREATED, wrap_response(view, debug_params, None))
}

/// Returns the document summary and full chat history of a session.
pub async fn get_session_handler(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    debug_params: Query<DebugParams>,
) -> Result<Json<ApiResponse<SessionView>>, AppError> {
    let session = find_session(&app_state, id).await?;
    let mut session = session.lock().await;
    session.touch();
    let view = SessionView::from(&*session);
    Ok(wrap_response(view, debug_params, None))
}

/// Discards a session and everything in it.
pub async fn delete_session_handler(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if app_state.sessions.remove(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::SessionNotFound(id))
    }
}

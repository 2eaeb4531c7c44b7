//! # Chat Handlers
//!
//! Asking questions and clearing the conversation of a session.

use super::{find_session, wrap_response, ApiResponse, AppError, AppState, DebugParams};
use crate::types::{AskRequest, AskResponse, ClearHistoryResponse};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use docqa::providers::factory::create_provider;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

/// Handler for `POST /sessions/{id}/ask`.
///
/// The API key comes from `Authorization: Bearer <key>` and falls back to the
/// configured key. The model's answer, or the error string if the call fails,
/// is appended to the session's history.
pub async fn ask_handler(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    debug_params: Query<DebugParams>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    Json(payload): Json<AskRequest>,
) -> Result<Json<ApiResponse<AskResponse>>, AppError> {
    if payload.question.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Question must not be empty.".to_string(),
        ));
    }

    let session = find_session(&app_state, id).await?;
    let api_key = bearer.as_ref().map(|TypedHeader(auth)| auth.token());
    let provider = create_provider(&app_state.config.provider, api_key)?;
    let persona = &app_state.config.persona;

    let mut session = session.lock().await;
    info!(session = %id, "Received question.");

    let debug_info = if debug_params.debug.unwrap_or(false) {
        Some(json!({ "prompt": session.prompt_for(persona, &payload.question) }))
    } else {
        None
    };

    let exchange = session
        .ask(provider.as_ref(), persona, &payload.question)
        .await
        .clone();
    let history_len = session.history().len();

    Ok(wrap_response(
        AskResponse {
            exchange,
            history_len,
        },
        debug_params,
        debug_info,
    ))
}

/// Handler for `DELETE /sessions/{id}/history`.
pub async fn clear_history_handler(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    debug_params: Query<DebugParams>,
) -> Result<Json<ApiResponse<ClearHistoryResponse>>, AppError> {
    let session = find_session(&app_state, id).await?;
    let mut session = session.lock().await;
    let cleared = session.history().len();
    session.clear_history();
    Ok(wrap_response(
        ClearHistoryResponse { cleared },
        debug_params,
        None,
    ))
}

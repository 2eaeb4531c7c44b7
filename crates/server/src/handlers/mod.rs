//! # API Route Handlers
//!
//! This module organizes all the Axum route handlers for `docqa-server`,
//! split by the part of the session they act on.

pub mod chat;
pub mod document;
pub mod general;
pub mod session;

// Re-export all handlers so the router can reach them under `handlers::`.
pub use chat::*;
pub use document::*;
pub use general::*;
pub use session::*;

// Shared items used by multiple handler modules.
use super::{
    errors::AppError,
    state::{AppState, SharedSession},
    types::{ApiResponse, DebugParams},
};
use axum::{extract::Query, Json};
use serde_json::Value;
use uuid::Uuid;

/// A shared helper function to wrap a successful result in the standard `ApiResponse`
/// format, optionally including debug information if requested.
pub(crate) fn wrap_response<T>(
    result: T,
    debug_params: Query<DebugParams>,
    debug_info: Option<Value>,
) -> Json<ApiResponse<T>> {
    let debug = if debug_params.debug.unwrap_or(false) {
        debug_info
    } else {
        None
    };
    Json(ApiResponse { debug, result })
}

/// Looks up a session or fails with `404`.
pub(crate) async fn find_session(app_state: &AppState, id: Uuid) -> Result<SharedSession, AppError> {
    app_state
        .sessions
        .get(&id)
        .await
        .ok_or(AppError::SessionNotFound(id))
}

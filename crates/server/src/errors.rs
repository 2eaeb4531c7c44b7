use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use docqa::{ingest::LoadError, QaError};
use serde_json::json;
use tracing::{error, warn};
use uuid::Uuid;

/// A custom error type for the server application.
///
/// Each variant maps to an HTTP status and a JSON body of the form
/// `{"error": "..."}`.
pub enum AppError {
    /// The uploaded file could not be turned into text.
    Load(LoadError),
    /// Errors from building or configuring the model client.
    Qa(QaError),
    /// No session with the given id exists.
    SessionNotFound(Uuid),
    /// The request itself was unusable.
    BadRequest(String),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        AppError::Load(err)
    }
}

impl From<QaError> for AppError {
    fn from(err: QaError) -> Self {
        AppError::Qa(err)
    }
}

/// Conversion from `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::Load(err) => {
                warn!("Document extraction failed: {err}");
                let status = match err {
                    LoadError::TooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
                    LoadError::Unsupported(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    LoadError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
                    _ => StatusCode::UNPROCESSABLE_ENTITY,
                };
                (status, err.to_string())
            }
            AppError::Qa(err) => {
                error!("QaError: {:?}", err);
                match err {
                    QaError::MissingApiKey => (
                        StatusCode::UNAUTHORIZED,
                        "Please enter your API key to continue.".to_string(),
                    ),
                    QaError::MisconfiguredProvider(_) | QaError::ReqwestClientBuild(_) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Server is not configured correctly.".to_string(),
                    ),
                    other => (StatusCode::BAD_GATEWAY, other.to_string()),
                }
            }
            AppError::SessionNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Session '{id}' not found."))
            }
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}

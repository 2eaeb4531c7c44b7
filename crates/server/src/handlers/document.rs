//! # Document Upload Handler
//!
//! Accepts one PDF or TXT file per request, extracts its text and makes it the
//! session's document. A failed extraction is reported and leaves the
//! session's current document in place.

use super::{find_session, wrap_response, ApiResponse, AppError, AppState, DebugParams};
use crate::types::DocumentView;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use axum_extra::extract::Multipart;
use docqa::ingest::{DocumentKind, DocumentLoader, LoadError, LoadedDocument};
use docqa_pdf::PdfLoader;
use docqa_text::TextLoader;
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Runs the loader matching `kind` over the uploaded bytes.
#[instrument(skip(bytes), fields(bytes = bytes.len()))]
pub async fn extract_document(kind: DocumentKind, bytes: &[u8]) -> Result<String, LoadError> {
    let loader: &dyn DocumentLoader = match kind {
        DocumentKind::Pdf => &PdfLoader,
        DocumentKind::Text => &TextLoader,
    };
    loader.load(bytes).await
}

struct Upload {
    file_name: String,
    content_type: Option<String>,
    data: Vec<u8>,
}

/// Handler for `POST /sessions/{id}/document`.
pub async fn upload_document_handler(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    debug_params: Query<DebugParams>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<DocumentView>>, AppError> {
    let session = find_session(&app_state, id).await?;
    let mut upload: Option<Upload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("uploaded_file").to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?
                    .to_vec();
                info!(
                    session = %id,
                    file = %file_name,
                    bytes = data.len(),
                    "Received document upload."
                );
                upload = Some(Upload {
                    file_name,
                    content_type,
                    data,
                });
            }
            _ => warn!("Ignoring unknown multipart field: {}", name),
        }
    }

    let upload = upload.ok_or_else(|| {
        AppError::BadRequest("No file found in request. Provide a 'file' part.".to_string())
    })?;

    if upload.data.len() > app_state.config.max_upload_bytes {
        return Err(LoadError::TooLarge(upload.data.len()).into());
    }

    let kind = DocumentKind::from_upload(upload.content_type.as_deref(), Some(&upload.file_name))?;

    let mut session = session.lock().await;
    session.touch();
    let text = extract_document(kind, &upload.data).await?;
    let document = LoadedDocument::new(upload.file_name, kind, text)?;
    let view = DocumentView::from(&document);
    session.load_document(document);

    let debug_info = Some(json!({
        "content_type": upload.content_type,
        "bytes": upload.data.len(),
    }));
    Ok(wrap_response(view, debug_params, debug_info))
}

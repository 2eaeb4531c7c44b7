use docqa::{
    ingest::{DocumentKind, LoadedDocument},
    Exchange, Session,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Deserialize, Default)]
pub struct DebugParams {
    pub debug: Option<bool>,
}

#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<Value>,
    pub result: T,
}

/// What the page needs to render the loaded document.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DocumentView {
    pub name: String,
    pub kind: DocumentKind,
    pub chars: usize,
    pub preview: String,
}

impl From<&LoadedDocument> for DocumentView {
    fn from(document: &LoadedDocument) -> Self {
        Self {
            name: document.name.clone(),
            kind: document.kind,
            chars: document.char_count(),
            preview: document.preview(),
        }
    }
}

/// A full snapshot of one session for rendering.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SessionView {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub document: Option<DocumentView>,
    pub history: Vec<Exchange>,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id(),
            created_at: session.created_at(),
            document: session.document().map(DocumentView::from),
            history: session.history().as_slice().to_vec(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AskResponse {
    pub exchange: Exchange,
    pub history_len: usize,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ClearHistoryResponse {
    pub cleared: usize,
}

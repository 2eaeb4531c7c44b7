//! # Common Test Utilities
//!
//! `TestApp` spawns the real router on a random port with the model endpoint
//! pointed at an `httpmock::MockServer`, plus helpers for the session API.

// Not every test file uses every helper.
#![allow(unused)]

use anyhow::Result;
use axum::serve;
use docqa::ProviderConfig;
use docqa_server::{
    config::AppConfig,
    router,
    state::{build_app_state, AppState},
    types::{ApiResponse, AskResponse, DocumentView, SessionView},
};
use httpmock::MockServer;
use reqwest::{multipart, Client, Response};
use serde::de::DeserializeOwned;
use std::net::SocketAddr;
use tokio::{net::TcpListener, task::JoinHandle};

/// The path the mocked Gemini endpoint listens on.
pub const GEMINI_PATH: &str = "/v1beta/models/mock-gemini:generateContent";
/// The key the tests send from the "browser".
pub const TEST_API_KEY: &str = "test-api-key";

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    pub app_state: AppState,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the application with default settings and a mocked Gemini endpoint.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with(|_| {}).await
    }

    /// Spawns the application after letting the caller adjust the configuration.
    pub async fn spawn_with(customize: impl FnOnce(&mut AppConfig)) -> Result<Self> {
        let _ = tracing_subscriber_init();
        let mock_server = MockServer::start();

        let mut config = AppConfig {
            port: 0,
            persona: "You are a test assistant.".to_string(),
            provider: ProviderConfig {
                provider: "gemini".to_string(),
                api_url: Some(mock_server.url(GEMINI_PATH)),
                api_key: None,
                model_name: "mock-gemini".to_string(),
            },
            ..AppConfig::default()
        };
        customize(&mut config);

        let app_state = build_app_state(config).await?;
        let app_state_for_harness = app_state.clone();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = router::create_router(app_state);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            app_state: app_state_for_harness,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Creates a session and returns its id.
    pub async fn create_session(&self) -> Result<String> {
        let response = self.client.post(self.url("/sessions")).send().await?;
        assert_eq!(response.status().as_u16(), 201);
        let view: SessionView = result_of(response).await?;
        Ok(view.id.to_string())
    }

    pub async fn get_session(&self, session_id: &str) -> Result<SessionView> {
        let response = self
            .client
            .get(self.url(&format!("/sessions/{session_id}")))
            .send()
            .await?;
        result_of(response).await
    }

    /// Uploads a file as the `file` part of a multipart form.
    pub async fn upload(
        &self,
        session_id: &str,
        file_name: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<Response> {
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)?;
        let form = multipart::Form::new().part("file", part);
        Ok(self
            .client
            .post(self.url(&format!("/sessions/{session_id}/document")))
            .multipart(form)
            .send()
            .await?)
    }

    /// Asks a question, sending `api_key` as a bearer token when given.
    pub async fn ask(
        &self,
        session_id: &str,
        question: &str,
        api_key: Option<&str>,
    ) -> Result<Response> {
        let mut request = self
            .client
            .post(self.url(&format!("/sessions/{session_id}/ask")))
            .json(&serde_json::json!({ "question": question }));
        if let Some(key) = api_key {
            request = request.bearer_auth(key);
        }
        Ok(request.send().await?)
    }

    /// Asks with the test key and decodes the successful response.
    pub async fn ask_ok(&self, session_id: &str, question: &str) -> Result<AskResponse> {
        let response = self.ask(session_id, question, Some(TEST_API_KEY)).await?;
        assert_eq!(response.status().as_u16(), 200);
        result_of(response).await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Decodes the `result` field of an `ApiResponse`.
pub async fn result_of<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body: ApiResponse<T> = response.json().await?;
    Ok(body.result)
}

/// Reads the `error` message of a failed response.
pub async fn error_of(response: Response) -> Result<String> {
    let body: serde_json::Value = response.json().await?;
    Ok(body["error"].as_str().unwrap_or_default().to_string())
}

/// A Gemini `generateContent` response body carrying `text`.
pub fn gemini_reply(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
    })
}

fn tracing_subscriber_init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .try_init()
}

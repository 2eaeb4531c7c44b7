//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the
//! in-memory session store. Sessions live only as long as the process.

use crate::config::AppConfig;
use docqa::Session;
use std::{collections::HashMap, sync::Arc, time::Duration};
use tokio::{
    sync::{Mutex, RwLock},
    task::JoinHandle,
    time::MissedTickBehavior,
};
use tracing::{debug, info};
use uuid::Uuid;

/// Bounds on how often the idle-session sweep runs.
const MIN_SWEEP_INTERVAL: Duration = Duration::from_secs(1);
const MAX_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// A session guarded by its own lock. Holding the lock across the model call
/// keeps one session's actions strictly sequential.
pub type SharedSession = Arc<Mutex<Session>>;

/// All live sessions, keyed by id.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SharedSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session and returns its id with a handle to it.
    pub async fn create(&self) -> (Uuid, SharedSession) {
        let session = Session::new();
        let id = session.id();
        let shared = Arc::new(Mutex::new(session));
        self.sessions.write().await.insert(id, shared.clone());
        info!(session = %id, "Session created.");
        (id, shared)
    }

    pub async fn get(&self, id: &Uuid) -> Option<SharedSession> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Discards a session. Returns whether it existed.
    pub async fn remove(&self, id: &Uuid) -> bool {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            info!(session = %id, "Session discarded.");
        }
        removed
    }

    /// Discards every session idle for longer than `ttl` and returns how many
    /// went. A session whose lock is held is in use and always stays.
    pub async fn reap_idle(&self, ttl: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| match session.try_lock() {
            Ok(session) => session.idle_for() <= ttl,
            Err(_) => true,
        });
        let reaped = before - sessions.len();
        if reaped > 0 {
            info!(reaped, remaining = sessions.len(), "Discarded idle sessions.");
        }
        reaped
    }

    /// Starts a background sweep that calls [`SessionStore::reap_idle`]
    /// periodically. The task ends once the store itself is dropped.
    pub fn spawn_reaper(&self, ttl: Duration) -> JoinHandle<()> {
        let sessions = Arc::downgrade(&self.sessions);
        let period = ttl.clamp(MIN_SWEEP_INTERVAL, MAX_SWEEP_INTERVAL);
        debug!(?ttl, ?period, "Starting idle session sweep.");
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let Some(sessions) = sessions.upgrade() else {
                    break;
                };
                SessionStore { sessions }.reap_idle(ttl).await;
            }
        })
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration.
    pub config: Arc<AppConfig>,
    /// Every browser session's document and chat history.
    pub sessions: SessionStore,
}

/// Builds the shared application state from the configuration.
///
/// The provider settings are checked here so a broken configuration fails at
/// startup; the provider itself is built per question with the user's key.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    match config.provider.provider.as_str() {
        "gemini" => {}
        "local" => {
            if config.provider.api_url.as_deref().unwrap_or_default().is_empty() {
                return Err(anyhow::anyhow!(
                    "api_url is required for the local provider. Set DOCQA_PROVIDER__API_URL."
                ));
            }
        }
        other => {
            return Err(anyhow::anyhow!("Unsupported AI provider type '{other}'"));
        }
    }

    info!(
        provider = %config.provider.provider,
        model = %config.provider.model_name,
        "Initialized application state."
    );

    let sessions = SessionStore::new();
    if config.session_ttl_secs > 0 {
        sessions.spawn_reaper(Duration::from_secs(config.session_ttl_secs));
    }

    Ok(AppState {
        config: Arc::new(config),
        sessions,
    })
}

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::ServerConfig;
use crate::session::SessionState;

pub struct AppState {
    pub sessions: Arc<RwLock<HashMap<String, SessionState>>>,
    pub config: ServerConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            config,
        }
    }

    /// Snapshot of a session's state, if the token is known
    pub async fn load_session(&self, token: &str) -> Option<SessionState> {
        let sessions = self.sessions.read().await;
        sessions.get(token).cloned()
    }

    /// Write a session back. The last writer for a token wins.
    pub async fn store_session(&self, token: &str, session: SessionState) {
        let mut sessions = self.sessions.write().await;
        if sessions.insert(token.to_string(), session).is_none() {
            log::debug!("[{}] Session created", token);
        }
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

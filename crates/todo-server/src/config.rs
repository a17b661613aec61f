//! Configuration management for the todo server
//!
//! Supports loading configuration from environment variables with fallback to defaults.

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 4567;
pub const DEFAULT_SESSION_COOKIE: &str = "todo_session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    pub port: u16,
    /// Name of the cookie carrying the session token
    pub cookie_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cookie_name: DEFAULT_SESSION_COOKIE.to_string(),
        }
    }
}

impl ServerConfig {
    /// Load from environment variables
    ///
    /// Environment variables:
    /// - `HOST`: Interface to bind (default: 127.0.0.1)
    /// - `PORT`: Port to listen on (default: 4567)
    /// - `SESSION_COOKIE`: Session cookie name (default: todo_session)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            cookie_name: lookup("SESSION_COOKIE")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.cookie_name),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

use log::warn;
use std::time::Duration;

const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Where the client finds the server and how long it waits for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Reads `MG_API_URL` and `MG_API_TIMEOUT_MS`, keeping defaults for
    /// anything unset or unparseable.
    pub fn from_env() -> Self {
        let base_url = std::env::var("MG_API_URL")
            .ok()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let timeout_ms = match std::env::var("MG_API_TIMEOUT_MS") {
            Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Invalid MG_API_TIMEOUT_MS={:?}, using {}", raw, DEFAULT_TIMEOUT_MS);
                DEFAULT_TIMEOUT_MS
            }),
            Err(_) => DEFAULT_TIMEOUT_MS,
        };
        Self {
            base_url,
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

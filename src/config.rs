//! Process configuration
//!
//! Resolved once at startup and passed by reference into the
//! orchestrator; nothing looks up ambient state after boot. Absence of
//! the API key is the expected offline mode, not an error.

use std::env;
use std::fmt;

use crate::orchestrator::Orchestrator;
use crate::remote::{MistralClient, RemoteBackend};

pub const DEFAULT_MODEL: &str = "mistral-tiny";
pub const DEFAULT_PORT: u16 = 8080;

/// Opaque token for the remote service
#[derive(Clone)]
pub struct RemoteCredentials {
    api_key: String,
}

impl RemoteCredentials {
    /// Blank or whitespace-only keys count as absent.
    pub fn new(api_key: impl Into<String>) -> Option<Self> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            None
        } else {
            Some(Self { api_key })
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

// Keep the key out of logs and panics.
impl fmt::Debug for RemoteCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteCredentials")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub credentials: Option<RemoteCredentials>,
    pub model: String,
    /// Override for the chat-completions endpoint; `None` uses the
    /// public Mistral API.
    pub endpoint: Option<String>,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let credentials = env::var("MISTRAL_API_KEY")
            .ok()
            .and_then(RemoteCredentials::new);
        let model = env::var("MISTRAL_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let endpoint = env::var("MISTRAL_ENDPOINT").ok();
        let port = env::var("PORT")
            .or_else(|_| env::var("API_PORT"))
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            credentials,
            model,
            endpoint,
            port,
        }
    }

    pub fn api_available(&self) -> bool {
        self.credentials.is_some()
    }

    /// Build the orchestrator this configuration describes.
    pub fn build_orchestrator(&self) -> Orchestrator {
        let remote = self.credentials.as_ref().map(|credentials| {
            let client = match &self.endpoint {
                Some(url) => MistralClient::with_base_url(
                    credentials.api_key().to_string(),
                    self.model.clone(),
                    url.clone(),
                ),
                None => MistralClient::new(credentials.api_key().to_string(), self.model.clone()),
            };
            Box::new(client) as Box<dyn RemoteBackend>
        });

        Orchestrator::new(remote)
    }
}

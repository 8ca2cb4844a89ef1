use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const MODEL_VAR: &str = "OPENAI_MODEL";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_SECRETS_DIR: &str = "/run/secrets";

/// Read-only lookup of named secrets.
pub trait SecretStore: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;
}

/// Secrets stored one per file, as mounted by Docker or Kubernetes.
#[derive(Debug, Clone)]
pub struct FileSecretStore {
    dir: PathBuf,
}

impl FileSecretStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_env() -> Self {
        let dir = env::var("ASSISTBOT_SECRETS_DIR").unwrap_or_else(|_| DEFAULT_SECRETS_DIR.into());
        Self::new(dir)
    }
}

impl SecretStore for FileSecretStore {
    fn get(&self, name: &str) -> Option<String> {
        let path = self.dir.join(name);
        match std::fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(err) => {
                debug!(path = %path.display(), error = %err, "secret not readable");
                None
            }
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// First non-empty credential from the explicit value, the environment and
/// the secret store, in that order.
pub fn resolve_credential(explicit: Option<&str>, store: &dyn SecretStore) -> Option<String> {
    if let Some(key) = non_empty(explicit.map(str::to_string)) {
        debug!("using explicitly provided API key");
        return Some(key);
    }
    if let Some(key) = non_empty(env::var(API_KEY_VAR).ok()) {
        debug!("using API key from environment");
        return Some(key);
    }
    let key = non_empty(store.get(API_KEY_VAR));
    if key.is_some() {
        debug!("using API key from secret store");
    }
    key
}

pub fn resolve_model(explicit: Option<&str>) -> String {
    non_empty(explicit.map(str::to_string))
        .or_else(|| non_empty(env::var(MODEL_VAR).ok()))
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}

#[derive(Clone)]
pub struct AiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub chat_url: Option<String>,
    pub timeout: Duration,
}

impl std::fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("chat_url", &self.chat_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl AiConfig {
    pub fn from_env() -> Result<Self> {
        Self::resolve(None, None, &FileSecretStore::from_env())
    }

    pub fn resolve(
        explicit_key: Option<&str>,
        explicit_model: Option<&str>,
        store: &dyn SecretStore,
    ) -> Result<Self> {
        let timeout = match env::var("ASSISTBOT_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("invalid ASSISTBOT_TIMEOUT_SECS: {raw:?}"))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        Ok(Self {
            api_key: resolve_credential(explicit_key, store),
            model: resolve_model(explicit_model),
            chat_url: non_empty(env::var("OPENAI_CHAT_URL").ok()),
            timeout: Duration::from_secs(timeout),
        })
    }
}

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};

use crate::ai::config::AiConfig;
use crate::ai::error::{AssistError, RemoteError};

pub const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Longest slice of a response body kept in logs and error values.
pub const BODY_SNIPPET_CHARS: usize = 200;

fn snippet(body: &str) -> String {
    body.chars().take(BODY_SNIPPET_CHARS).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: [ChatMessage; 2],
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Everything one completion call needs, fixed at construction.
#[derive(Clone)]
pub struct ChatSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub url: String,
    pub timeout: Duration,
}

impl ChatSettings {
    pub fn from_config(config: &AiConfig, temperature: f32) -> Self {
        Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature,
            url: config
                .chat_url
                .clone()
                .unwrap_or_else(|| OPENAI_CHAT_URL.to_string()),
            timeout: config.timeout,
        }
    }
}

/// Build the two-turn conversation sent for every request.
pub fn build_messages(system_prompt: &str, user_text: &str) -> [ChatMessage; 2] {
    [ChatMessage::system(system_prompt), ChatMessage::user(user_text)]
}

#[derive(Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    settings: ChatSettings,
}

impl CompletionClient {
    pub fn new(settings: ChatSettings) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;
        Ok(Self { http, settings })
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    pub fn has_credential(&self) -> bool {
        self.credential().is_some()
    }

    fn credential(&self) -> Option<&str> {
        self.settings
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Send `system_prompt` and `user_text` as a two-message chat and return
    /// the generated text.
    #[instrument(level = "trace", skip(self, system_prompt, user_text), fields(model = %self.settings.model))]
    pub async fn complete(&self, system_prompt: &str, user_text: &str) -> Result<String, AssistError> {
        let api_key = self.credential().ok_or(AssistError::MissingCredential)?;
        if user_text.trim().is_empty() {
            return Err(AssistError::EmptyInput);
        }

        let body = ChatRequest {
            model: &self.settings.model,
            temperature: self.settings.temperature,
            messages: build_messages(system_prompt, user_text),
        };

        debug!(url = %self.settings.url, chars = user_text.chars().count(), "sending chat completion request");

        let resp = self
            .http
            .post(&self.settings.url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = match resp.text().await {
                Ok(text) => snippet(&text),
                Err(err) => {
                    debug!(error = %err, "failed to read error body");
                    String::new()
                }
            };
            warn!(%status, body = %body, "completion API error");
            return Err(RemoteError::Status { status, body }.into());
        }

        let raw = resp.text().await.map_err(|err| self.transport_error(err))?;
        debug!(snippet = %snippet(&raw), "chat response body");
        trace!(raw = %raw, "chat response");

        Ok(parse_chat_content(&raw)?)
    }

    fn transport_error(&self, err: reqwest::Error) -> RemoteError {
        if err.is_timeout() {
            warn!(timeout_secs = self.settings.timeout.as_secs(), "completion request timed out");
            RemoteError::Timeout(self.settings.timeout)
        } else {
            warn!(error = %err, "completion request failed");
            RemoteError::Transport(err)
        }
    }
}

/// Extract the first choice's text from a raw chat completion body.
pub fn parse_chat_content(raw: &str) -> Result<String, RemoteError> {
    let chat: ChatResponse =
        serde_json::from_str(raw).map_err(|err| RemoteError::Malformed(err.to_string()))?;
    let content = chat
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| RemoteError::Malformed("missing chat choice".into()))?
        .message
        .content
        .ok_or_else(|| RemoteError::Malformed("choice has no content".into()))?;
    Ok(content.trim().to_string())
}

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Failures a single assistant request can end in.
///
/// None of them are fatal: the caller reports the message and waits for the
/// next request.
#[derive(Debug, Error)]
pub enum AssistError {
    #[error("OPENAI_API_KEY is not set. Configure it in .env or the secret store and try again.")]
    MissingCredential,
    #[error("Please enter some text.")]
    EmptyInput,
    #[error("The completion service failed: {0}")]
    RemoteService(#[from] RemoteError),
}

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("no response within {}s", .0.as_secs())]
    Timeout(Duration),
    /// Non-2xx reply. `body` holds at most the first 200 chars of the response.
    #[error("API error {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl AssistError {
    /// Whether the request was rejected locally without touching the network.
    pub fn is_local(&self) -> bool {
        matches!(self, AssistError::MissingCredential | AssistError::EmptyInput)
    }
}

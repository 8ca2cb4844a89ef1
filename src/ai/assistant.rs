use tracing::{info, instrument, warn};

use crate::ai::completion::{ChatSettings, CompletionClient};
use crate::ai::config::AiConfig;
use crate::ai::error::AssistError;
use crate::ai::prompts::{select_template, Mode, Profile};

/// Turns a (mode, text) pair into an answer from the completion service.
#[derive(Clone)]
pub struct Assistant {
    profile: Profile,
    client: CompletionClient,
}

impl Assistant {
    pub fn new(profile: Profile, client: CompletionClient) -> Self {
        Self { profile, client }
    }

    pub fn from_config(profile: Profile, config: &AiConfig) -> anyhow::Result<Self> {
        let settings = ChatSettings::from_config(config, profile.temperature());
        Ok(Self::new(profile, CompletionClient::new(settings)?))
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    pub fn has_credential(&self) -> bool {
        self.client.has_credential()
    }

    #[instrument(level = "trace", skip(self, text), fields(profile = %self.profile))]
    pub async fn ask(&self, mode: Mode, text: &str) -> Result<String, AssistError> {
        if text.trim().is_empty() {
            return Err(AssistError::EmptyInput);
        }
        let template = select_template(self.profile, mode);
        match self.client.complete(template, text).await {
            Ok(answer) => {
                info!(%mode, chars = answer.chars().count(), "completion succeeded");
                Ok(answer)
            }
            Err(err) => {
                warn!(%mode, error = %err, "completion failed");
                Err(err)
            }
        }
    }
}

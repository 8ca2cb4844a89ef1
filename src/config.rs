use std::env;

use anyhow::Result;

use crate::ai::config::AiConfig;
use crate::ai::prompts::Profile;

#[derive(Clone, Debug)]
pub struct Config {
    pub profile: Profile,
    pub ai: AiConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let profile = match env::var("ASSISTBOT_PROFILE") {
            Ok(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => Profile::default(),
        };
        let ai = AiConfig::from_env()?;
        Ok(Self { profile, ai })
    }
}

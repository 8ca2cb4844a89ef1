//! Helpers shared by unit and integration tests.

use std::time::Duration;

use teloxide::{
    types::{Me, User, UserId},
    Bot,
};

use crate::ai::completion::{ChatSettings, CompletionClient};
use crate::ai::{Assistant, Profile};

/// Bot pointed at a local mock of the Telegram Bot API, token `TEST`.
pub fn mock_bot(api_url: &str) -> Bot {
    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("failed to build HTTP client");
    Bot::with_client("TEST", client)
        .set_api_url(reqwest::Url::parse(api_url).expect("invalid mock API url"))
}

pub fn test_settings(url: &str, api_key: Option<&str>) -> ChatSettings {
    ChatSettings {
        api_key: api_key.map(str::to_string),
        model: "gpt-test".to_string(),
        temperature: Profile::Writing.temperature(),
        url: url.to_string(),
        timeout: Duration::from_secs(5),
    }
}

pub fn test_assistant(profile: Profile, url: &str, api_key: Option<&str>) -> Assistant {
    let mut settings = test_settings(url, api_key);
    settings.temperature = profile.temperature();
    let client = CompletionClient::new(settings).expect("failed to build completion client");
    Assistant::new(profile, client)
}

/// Minimal chat completion body carrying `content` as the only choice.
pub fn chat_completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content }, "finish_reason": "stop" }
        ]
    })
}

pub fn test_me() -> Me {
    Me {
        user: User {
            id: UserId(1),
            is_bot: true,
            first_name: "Test".into(),
            last_name: None,
            username: Some("testbot".into()),
            language_code: None,
            is_premium: false,
            added_to_attachment_menu: false,
        },
        can_join_groups: true,
        can_read_all_group_messages: true,
        supports_inline_queries: false,
        can_connect_to_business: false,
    }
}

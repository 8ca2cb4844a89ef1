use anyhow::Result;
use teloxide::prelude::*;

use crate::ai::Assistant;
use crate::system_info::get_system_info;

pub fn format_info(assistant: &Assistant) -> String {
    let key = if assistant.has_credential() {
        "configured"
    } else {
        "missing"
    };
    format!(
        "{}\nProfile: {}\nModel: {}\nAPI key: {key}",
        get_system_info(),
        assistant.profile(),
        assistant.model()
    )
}

pub async fn show_system_info(bot: Bot, msg: Message, assistant: Assistant) -> Result<()> {
    tracing::debug!(chat_id = msg.chat.id.0, "Showing system info");
    bot.send_message(msg.chat.id, format_info(&assistant)).await?;
    Ok(())
}

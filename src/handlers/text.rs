use anyhow::Result;
use teloxide::{prelude::*, types::ReplyParameters};

use crate::ai::Assistant;
use crate::messages::{help_text, CHOOSE_MODE_PROMPT};
use crate::utils::send_html;

use super::keyboard::mode_keyboard;

pub async fn help(bot: Bot, msg: Message, assistant: Assistant) -> Result<()> {
    send_html(&bot, msg.chat.id, help_text(assistant.profile())).await?;
    Ok(())
}

/// Reply to a plain text message with the mode selector.
pub async fn offer_modes(bot: Bot, msg: Message, assistant: Assistant) -> Result<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    if text.trim().is_empty() {
        return Ok(());
    }
    tracing::debug!(chat_id = msg.chat.id.0, "offering mode selection");
    bot.send_message(msg.chat.id, CHOOSE_MODE_PROMPT)
        .reply_parameters(ReplyParameters::new(msg.id))
        .reply_markup(mode_keyboard(assistant.profile()))
        .await?;
    Ok(())
}

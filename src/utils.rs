use anyhow::Result;
use teloxide::{
    prelude::*,
    types::{ChatAction, InlineKeyboardMarkup, MessageId, ParseMode, ReplyParameters},
};

use crate::text_utils::{split_message, TELEGRAM_MESSAGE_LIMIT};

/// Attempt to edit a message and log a warning on failure.
pub async fn try_edit_message(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    text: impl Into<String>,
    markup: InlineKeyboardMarkup,
) {
    if let Err(err) = bot
        .edit_message_text(chat_id, message_id, text)
        .reply_markup(markup)
        .await
    {
        tracing::warn!(
            error = %err,
            chat_id = chat_id.0,
            message_id = message_id.0,
            "Failed to edit message",
        );
    }
}

/// Show the "typing..." indicator; failures only cost the indicator.
pub async fn try_send_typing(bot: &Bot, chat_id: ChatId) {
    if let Err(err) = bot.send_chat_action(chat_id, ChatAction::Typing).await {
        tracing::debug!(error = %err, chat_id = chat_id.0, "Failed to send chat action");
    }
}

/// Send `text` as one or more plain messages, the first replying to `reply_to`.
pub async fn send_long_text(
    bot: &Bot,
    chat_id: ChatId,
    reply_to: Option<MessageId>,
    text: &str,
) -> Result<usize> {
    let chunks = split_message(text, TELEGRAM_MESSAGE_LIMIT);
    for (idx, chunk) in chunks.iter().enumerate() {
        let mut request = bot.send_message(chat_id, chunk.as_str());
        if let (0, Some(id)) = (idx, reply_to) {
            request = request.reply_parameters(ReplyParameters::new(id));
        }
        request.await?;
    }
    tracing::debug!(chat_id = chat_id.0, chunks = chunks.len(), "sent text");
    Ok(chunks.len())
}

/// Send a short HTML-formatted message.
pub async fn send_html(bot: &Bot, chat_id: ChatId, text: impl Into<String>) -> Result<Message> {
    Ok(bot
        .send_message(chat_id, text)
        .parse_mode(ParseMode::Html)
        .await?)
}

use anyhow::Result;
use teloxide::prelude::*;

use crate::ai::Assistant;
use crate::messages::{mode_chosen_text, SOURCE_TEXT_MISSING, UNKNOWN_CHOICE};
use crate::utils::try_edit_message;

use super::assist::answer_request;
use super::keyboard::{empty_keyboard, parse_mode_callback};

/// The text a mode keyboard was offered for.
pub fn source_text(msg: &Message) -> Option<&str> {
    msg.text().or_else(|| msg.caption())
}

/// Handles a press on one of the mode buttons.
///
/// The keyboard message replies to the user's text, so the request is rebuilt
/// from the replied-to message and nothing is kept between updates.
pub async fn callback_handler(bot: Bot, q: CallbackQuery, assistant: Assistant) -> Result<()> {
    let Some(mode) = q.data.as_deref().and_then(parse_mode_callback) else {
        tracing::debug!(data = ?q.data, "ignoring unknown callback data");
        bot.answer_callback_query(q.id.clone()).text(UNKNOWN_CHOICE).await?;
        return Ok(());
    };

    let Some(keyboard_msg) = q.regular_message() else {
        bot.answer_callback_query(q.id.clone()).text(SOURCE_TEXT_MISSING).await?;
        return Ok(());
    };

    let Some(source) = keyboard_msg.reply_to_message() else {
        bot.answer_callback_query(q.id.clone()).text(SOURCE_TEXT_MISSING).await?;
        return Ok(());
    };
    let text = source_text(source).unwrap_or_default().to_string();

    bot.answer_callback_query(q.id.clone()).await?;

    let chat_id = keyboard_msg.chat.id;
    try_edit_message(
        &bot,
        chat_id,
        keyboard_msg.id,
        mode_chosen_text(assistant.profile(), mode),
        empty_keyboard(),
    )
    .await;

    answer_request(&bot, chat_id, Some(source.id), &assistant, mode, &text).await
}

use anyhow::Result;
use teloxide::{prelude::*, types::MessageId};

use crate::ai::{AssistError, Assistant, Mode};
use crate::messages::{error_text, RESULT_HEADER};
use crate::utils::{send_long_text, try_send_typing};

/// Text shown to the user for a finished request.
pub fn format_outcome(outcome: &Result<String, AssistError>) -> String {
    match outcome {
        Ok(answer) => format!("{RESULT_HEADER}\n\n{answer}"),
        Err(AssistError::EmptyInput) => AssistError::EmptyInput.to_string(),
        Err(err) => error_text(err),
    }
}

/// Run one request and reply with the answer or the error.
///
/// Request failures are reported to the chat and do not propagate; only
/// Telegram delivery errors are returned.
pub async fn answer_request(
    bot: &Bot,
    chat_id: ChatId,
    reply_to: Option<MessageId>,
    assistant: &Assistant,
    mode: Mode,
    text: &str,
) -> Result<()> {
    tracing::debug!(chat_id = chat_id.0, %mode, "handling assistant request");
    if !text.trim().is_empty() {
        try_send_typing(bot, chat_id).await;
    }
    let outcome = assistant.ask(mode, text).await;
    if let Err(err) = &outcome {
        tracing::warn!(chat_id = chat_id.0, %mode, error = %err, "request failed");
    }
    send_long_text(bot, chat_id, reply_to, &format_outcome(&outcome)).await?;
    Ok(())
}

/// `/a <text>` and `/b <text>`.
pub async fn run_mode_command(
    bot: Bot,
    msg: Message,
    assistant: Assistant,
    mode: Mode,
    text: String,
) -> Result<()> {
    answer_request(&bot, msg.chat.id, Some(msg.id), &assistant, mode, &text).await
}

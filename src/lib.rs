use anyhow::Result;
use teloxide::{prelude::*, utils::command::BotCommands};

pub mod ai;
pub mod commands;
mod config;
pub mod handlers;
mod messages;
mod system_info;
mod text_utils;
mod utils;

pub use ai::{select_template, AssistError, Assistant, Mode, Profile, RemoteError};
pub use commands::Command;
pub use config::Config;
pub use handlers::{callback_handler, format_outcome, offer_modes};
pub use system_info::get_system_info;
pub use text_utils::{split_message, TELEGRAM_MESSAGE_LIMIT};

/// Update routing: button presses, commands, then any other text.
pub fn schema() -> teloxide::dispatching::UpdateHandler<anyhow::Error> {
    dptree::entry()
        .branch(Update::filter_callback_query().endpoint(callback_handler))
        .branch(
            Update::filter_message()
                .branch(dptree::entry().filter_command::<Command>().endpoint(
                    |bot: Bot, msg: Message, cmd: Command, assistant: Assistant| async move {
                        cmd.dispatch(bot, msg, assistant).await
                    },
                ))
                .branch(dptree::endpoint(offer_modes)),
        )
}

// ──────────────────────────────────────────────────────────────
// Main application setup
// ──────────────────────────────────────────────────────────────

pub async fn run() -> Result<()> {
    // Load .env file if it exists (for local development)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting assistant bot...");

    let config = Config::from_env()?;
    if config.ai.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY not found; requests will fail until it is configured");
    }
    tracing::info!(profile = %config.profile, model = %config.ai.model, "assistant configured");

    let assistant = Assistant::from_config(config.profile, &config.ai)?;

    let bot = Bot::from_env();
    if let Err(err) = bot.set_my_commands(Command::bot_commands()).await {
        tracing::warn!(error = %err, "Failed to register bot commands");
    }

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![assistant])
        .default_handler(|upd| async move {
            tracing::trace!(update = ?upd, "unhandled update");
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

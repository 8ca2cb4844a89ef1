use anyhow::Result;
use teloxide::{prelude::*, utils::command::BotCommands};

use crate::ai::{Assistant, Mode};
use crate::handlers::{help, run_mode_command, show_system_info};

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "display this text.")]
    Start,
    #[command(description = "display this text.")]
    Help,
    #[command(description = "run mode A on the given text.")]
    A(String),
    #[command(description = "run mode B on the given text.")]
    B(String),
    #[command(description = "show system information.")]
    Info,
}

impl Command {
    pub async fn dispatch(self, bot: Bot, msg: Message, assistant: Assistant) -> Result<()> {
        match self {
            Command::Start | Command::Help => help(bot, msg, assistant).await?,
            Command::A(text) => run_mode_command(bot, msg, assistant, Mode::A, text).await?,
            Command::B(text) => run_mode_command(bot, msg, assistant, Mode::B, text).await?,
            Command::Info => show_system_info(bot, msg, assistant).await?,
        }
        Ok(())
    }
}

//! Shared text sent by the bot.
//!
//! Keep all user-facing strings in this module so they stay in one place and are
//! easy to update or translate.

use crate::ai::prompts::{Mode, Profile};

pub const RESULT_HEADER: &str = "🧾 Result";
pub const ERROR_PREFIX: &str = "⚠️ An error occurred: ";
pub const CHOOSE_MODE_PROMPT: &str = "Choose an expert mode (A/B) for this text:";
pub const SOURCE_TEXT_MISSING: &str = "The original text is no longer available. Please send it again.";
pub const UNKNOWN_CHOICE: &str = "Unknown choice.";
pub const GENERATED_DISCLAIMER: &str =
    "Note: generated results are a guide only. Check figures and names against the source.";

fn profile_title(profile: Profile) -> &'static str {
    match profile {
        Profile::Writing => "✍️ Writing assistant (rewrite/summarize)",
        Profile::Cooking => "🍳 Cooking assistant (recipes/nutrition)",
    }
}

fn mode_description(profile: Profile, mode: Mode) -> &'static str {
    match (profile, mode) {
        (Profile::Writing, Mode::A) => "a professional UX writer rewrites your text clearly and concisely",
        (Profile::Writing, Mode::B) => "a professional summarizer extracts and structures the key points",
        (Profile::Cooking, Mode::A) => "a professional chef suggests a dish from your ingredients",
        (Profile::Cooking, Mode::B) => "a dietitian reviews the nutrition balance of your meal",
    }
}

pub fn help_text(profile: Profile) -> String {
    let modes: Vec<String> = Mode::ALL
        .iter()
        .map(|&mode| {
            format!(
                "<b>{mode}</b> ({}) - {}",
                profile.mode_label(mode),
                mode_description(profile, mode)
            )
        })
        .collect();
    format!(
        "<b>{}</b>\n\n\
         Send me any text and pick a mode, or use a command directly.\n\n\
         {}\n\n\
         <b>Commands:</b>\n\
         /a &lt;text&gt; - Run mode A.\n\
         /b &lt;text&gt; - Run mode B.\n\
         /info - Show system information.\n\n\
         <i>{GENERATED_DISCLAIMER}</i>",
        profile_title(profile),
        modes.join("\n"),
    )
}

pub fn mode_button_label(profile: Profile, mode: Mode) -> String {
    format!("{mode}: {}", profile.mode_label(mode))
}

pub fn mode_chosen_text(profile: Profile, mode: Mode) -> String {
    format!("Mode {}. Working on it...", mode_button_label(profile, mode))
}

pub fn error_text(err: &impl std::fmt::Display) -> String {
    format!("{ERROR_PREFIX}{err}")
}

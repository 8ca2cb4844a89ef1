use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::ai::prompts::{Mode, Profile};
use crate::messages::mode_button_label;

const MODE_CALLBACK_PREFIX: &str = "mode:";

pub fn mode_callback_data(mode: Mode) -> String {
    format!("{MODE_CALLBACK_PREFIX}{mode}")
}

/// Parse callback data produced by [`mode_callback_data`].
pub fn parse_mode_callback(data: &str) -> Option<Mode> {
    data.strip_prefix(MODE_CALLBACK_PREFIX)?.parse().ok()
}

/// One row with a button per mode, the chat equivalent of a radio group.
pub fn mode_keyboard(profile: Profile) -> InlineKeyboardMarkup {
    let row = Mode::ALL
        .iter()
        .map(|&mode| {
            InlineKeyboardButton::callback(mode_button_label(profile, mode), mode_callback_data(mode))
        })
        .collect::<Vec<_>>();
    InlineKeyboardMarkup::new(vec![row])
}

pub fn empty_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(Vec::<Vec<InlineKeyboardButton>>::new())
}

pub mod assist;
pub mod callback;
pub mod info;
pub mod keyboard;
pub mod text;

pub use assist::{answer_request, format_outcome, run_mode_command};
pub use callback::{callback_handler, source_text};
pub use info::{format_info, show_system_info};
pub use keyboard::{mode_keyboard, parse_mode_callback};
pub use text::{help, offer_modes};

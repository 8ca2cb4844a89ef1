pub mod assistant;
pub mod completion;
pub mod config;
pub mod error;
pub mod prompts;

pub use assistant::Assistant;
pub use error::{AssistError, RemoteError};
pub use prompts::{select_template, Mode, Profile};

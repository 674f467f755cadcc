pub mod hook_command;
pub mod hook_name;

pub use hook_command::{sanitize, CommandError, HookCommand};
pub use hook_name::{HookName, NameError};

//! UI components for the shell.

mod app_shell;
mod command_palette;
mod logo;

pub use app_shell::*;
pub use command_palette::*;
pub use logo::*;

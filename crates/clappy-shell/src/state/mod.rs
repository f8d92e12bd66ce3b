//! State management for the shell.
//!
//! Everything here is renderer-independent: components hold a
//! `Signal<ShellState>` and feed it [`ShellEvent`]s.

pub mod palette;
pub mod shell_state;
pub mod theme_mode;

pub use palette::*;
pub use shell_state::*;
pub use theme_mode::*;

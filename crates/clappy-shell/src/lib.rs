//! CLAppy desktop shell.
//!
//! A single `AppShell` component: a logo that flips between light and dark
//! mode, and a Ctrl/Cmd+K command palette overlay with one inert input.

pub mod assets;
pub mod components;
pub mod config;
pub mod error;
pub mod launch;
pub mod listener;
pub mod logging;
pub mod shortcut;
pub mod state;
pub mod theme;

pub use components::{AppShell, CommandPalette, Logo};
pub use config::{Args, LaunchConfig};
pub use error::{ShellError, ShellResult};
pub use listener::{KeydownListener, ListenerId, ScriptHost, Webview};
pub use shortcut::{KeyChord, ShortcutBinding};
pub use state::{LogoSpin, PaletteState, ShellEvent, ShellState, StateChange, ThemeMode};
pub use theme::{LogoVariant, ThemedRoot};

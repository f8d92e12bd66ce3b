//! Shell state and its transition function.

use super::{LogoSpin, PaletteState, ThemeMode};

/// A user interaction the shell reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellEvent {
    /// The logo image was clicked.
    LogoClicked,
    /// The palette shortcut (Ctrl/Cmd+K) was pressed.
    PaletteShortcut,
    /// The dimmed area around the palette panel was clicked.
    BackdropClicked,
    /// A click landed inside the palette panel.
    PanelClicked,
}

/// Which flag an event changed, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateChange {
    Unchanged,
    Theme(ThemeMode),
    Palette(PaletteState),
}

/// Everything the shell renders from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShellState {
    pub theme: ThemeMode,
    pub palette: PaletteState,
    /// Cosmetic only; not part of the observable state.
    pub spin: LogoSpin,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one interaction. At most one of `theme` and `palette` changes.
    pub fn apply(&mut self, event: ShellEvent) -> StateChange {
        let change = match event {
            ShellEvent::LogoClicked => {
                self.theme = self.theme.toggled();
                self.spin.advance();
                StateChange::Theme(self.theme)
            }
            ShellEvent::PaletteShortcut => {
                self.palette = self.palette.toggled();
                StateChange::Palette(self.palette)
            }
            ShellEvent::BackdropClicked if self.palette.is_open() => {
                self.palette = PaletteState::Closed;
                StateChange::Palette(self.palette)
            }
            ShellEvent::BackdropClicked | ShellEvent::PanelClicked => StateChange::Unchanged,
        };

        match change {
            StateChange::Theme(theme) => tracing::debug!(%theme, "theme changed"),
            StateChange::Palette(palette) => tracing::debug!(%palette, "palette changed"),
            StateChange::Unchanged => tracing::trace!(?event, "no state change"),
        }

        change
    }
}

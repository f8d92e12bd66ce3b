//! Command palette visibility.

use std::fmt;

/// Whether the command palette overlay is mounted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaletteState {
    #[default]
    Closed,
    Open,
}

impl PaletteState {
    pub fn is_open(&self) -> bool {
        matches!(self, PaletteState::Open)
    }

    /// Shortcut transition: Closed -> Open, Open -> Closed.
    pub fn toggled(self) -> Self {
        match self {
            PaletteState::Closed => PaletteState::Open,
            PaletteState::Open => PaletteState::Closed,
        }
    }
}

impl fmt::Display for PaletteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteState::Closed => f.write_str("closed"),
            PaletteState::Open => f.write_str("open"),
        }
    }
}

//! Light/dark display mode.

use std::fmt;

/// Two-valued display preference owned by the shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Returns the CSS class / data-theme value.
    pub fn css_value(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_value())
    }
}

/// Click counter that restarts the logo rotation.
///
/// The CSS alternates between two identical keyframe animations so that
/// every click swaps the animation name and the browser replays it, even
/// when the previous spin has not finished yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LogoSpin(u32);

impl LogoSpin {
    pub fn advance(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    pub fn count(&self) -> u32 {
        self.0
    }

    /// Animation class for the logo element; empty until the first click.
    pub fn css_class(&self) -> &'static str {
        match self.0 {
            0 => "",
            n if n % 2 == 1 => "logo-spin-a",
            _ => "logo-spin-b",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
        assert_eq!(ThemeMode::default().css_value(), "dark");
    }

    #[test]
    fn test_toggle_alternates() {
        let mut mode = ThemeMode::Dark;
        for i in 0..10 {
            mode = mode.toggled();
            let expected = if i % 2 == 0 { ThemeMode::Light } else { ThemeMode::Dark };
            assert_eq!(mode, expected);
        }
    }

    #[test]
    fn test_display_matches_css_value() {
        assert_eq!(ThemeMode::Light.to_string(), "light");
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
    }

    #[test]
    fn test_spin_class_changes_every_click() {
        let mut spin = LogoSpin::default();
        assert_eq!(spin.css_class(), "");

        spin.advance();
        let first = spin.css_class();
        spin.advance();
        let second = spin.css_class();
        spin.advance();

        assert_eq!(first, "logo-spin-a");
        assert_eq!(second, "logo-spin-b");
        assert_eq!(spin.css_class(), first);
        assert_eq!(spin.count(), 3);
    }
}

//! Keyboard chords and the palette shortcut binding.

use serde::Deserialize;

/// A keydown as reported by the webview: the `KeyboardEvent.key` value plus
/// modifier flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct KeyChord {
    pub key: String,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub meta: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub shift: bool,
}

impl KeyChord {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

/// A key that fires together with Ctrl (or Cmd on macOS).
///
/// Only the primary modifier is checked; Alt and Shift are ignored, but Shift
/// changes the reported key (`K` instead of `k`) so Shift+Ctrl+K does not
/// match the palette binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShortcutBinding {
    key: &'static str,
}

impl ShortcutBinding {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }

    /// Ctrl/Cmd+K.
    pub const fn palette() -> Self {
        Self::new("k")
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn matches(&self, chord: &KeyChord) -> bool {
        (chord.ctrl || chord.meta) && chord.key == self.key
    }

    /// JavaScript boolean expression over a `KeyboardEvent` named `e`.
    ///
    /// Must agree with [`ShortcutBinding::matches`]; the webview uses it to
    /// decide whether to call `preventDefault` before the chord reaches Rust.
    pub fn js_predicate(&self) -> String {
        format!(
            "((e.ctrlKey || e.metaKey) && e.key === {})",
            js_string(self.key)
        )
    }
}

impl Default for ShortcutBinding {
    fn default() -> Self {
        Self::palette()
    }
}

/// Quotes a string as a JavaScript literal.
pub(crate) fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_k_matches() {
        let binding = ShortcutBinding::palette();
        assert!(binding.matches(&KeyChord::new("k").with_ctrl()));
    }

    #[test]
    fn test_cmd_k_matches() {
        let binding = ShortcutBinding::palette();
        assert!(binding.matches(&KeyChord::new("k").with_meta()));
    }

    #[test]
    fn test_extra_modifiers_ignored() {
        let binding = ShortcutBinding::palette();
        assert!(binding.matches(&KeyChord::new("k").with_ctrl().with_alt()));
        assert!(binding.matches(&KeyChord::new("k").with_ctrl().with_meta()));
    }

    #[test]
    fn test_non_matching_chords() {
        let binding = ShortcutBinding::palette();
        assert!(!binding.matches(&KeyChord::new("k")));
        assert!(!binding.matches(&KeyChord::new("k").with_alt()));
        assert!(!binding.matches(&KeyChord::new("j").with_ctrl()));
        assert!(!binding.matches(&KeyChord::new("K").with_ctrl().with_shift()));
    }

    #[test]
    fn test_js_predicate() {
        assert_eq!(
            ShortcutBinding::palette().js_predicate(),
            r#"((e.ctrlKey || e.metaKey) && e.key === "k")"#
        );
    }

    #[test]
    fn test_js_string_escapes_quotes() {
        assert_eq!(js_string(r#"a"b"#), r#""a\"b""#);
    }

    #[test]
    fn test_chord_deserializes_with_missing_flags() {
        let chord: KeyChord = serde_json::from_str(r#"{"key":"k","ctrl":true}"#).unwrap();
        assert_eq!(chord, KeyChord::new("k").with_ctrl());
    }
}

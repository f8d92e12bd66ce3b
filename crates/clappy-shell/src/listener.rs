//! Scoped window-level keydown listener.
//!
//! The webview owns the actual `keydown` handler; Rust owns its lifetime.
//! [`KeydownListener::acquire`] installs the handler and
//! [`KeydownListener::release`] removes it again. The bridge task reading
//! chords lives in the component scope and is cancelled with it; chords that
//! arrive after release are rejected by [`KeydownListener::accepts`].

use std::cell::Cell;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

use crate::shortcut::{KeyChord, ShortcutBinding};

/// Name of the window property holding installed handlers.
const REGISTRY: &str = "__clappyKeydown";

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

/// Runs scripts in the document hosting the shell.
pub trait ScriptHost {
    /// Channel to the running script.
    type Handle;

    fn run(&self, script: &str) -> Self::Handle;
}

/// The Dioxus webview document.
#[derive(Clone, Copy, Debug, Default)]
pub struct Webview;

impl ScriptHost for Webview {
    type Handle = document::Eval;

    fn run(&self, script: &str) -> Self::Handle {
        document::eval(script)
    }
}

/// Unique id of one listener installation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    fn next() -> Self {
        Self(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A keydown handler bound to one shortcut.
#[derive(Debug)]
pub struct KeydownListener {
    id: ListenerId,
    binding: ShortcutBinding,
    active: Cell<bool>,
}

impl KeydownListener {
    pub fn new(binding: ShortcutBinding) -> Self {
        Self {
            id: ListenerId::next(),
            binding,
            active: Cell::new(false),
        }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Installs the handler on `window`.
    ///
    /// Calling this on an already active listener installs nothing and
    /// returns `None`.
    pub fn acquire<H: ScriptHost>(&self, host: &H) -> Option<H::Handle> {
        if self.active.replace(true) {
            tracing::warn!(id = %self.id, "keydown listener already acquired");
            return None;
        }
        tracing::debug!(id = %self.id, key = self.binding.key(), "acquiring keydown listener");
        Some(host.run(&self.install_script()))
    }

    /// Removes the handler. Returns `false` if it was not installed.
    pub fn release<H: ScriptHost>(&self, host: &H) -> bool {
        if !self.active.replace(false) {
            return false;
        }
        tracing::debug!(id = %self.id, "releasing keydown listener");
        host.run(&self.remove_script());
        true
    }

    /// Whether a chord reported by the webview should reach the shell.
    pub fn accepts(&self, chord: &KeyChord) -> bool {
        self.is_active() && self.binding.matches(chord)
    }

    /// Script that registers the handler and then waits for release.
    pub fn install_script(&self) -> String {
        format!(
            r#"
            window.{REGISTRY} = window.{REGISTRY} || {{}};
            await new Promise((stop) => {{
                const handler = (e) => {{
                    if ({predicate}) {{
                        e.preventDefault();
                        dioxus.send({{
                            key: e.key,
                            ctrl: e.ctrlKey,
                            meta: e.metaKey,
                            alt: e.altKey,
                            shift: e.shiftKey,
                        }});
                    }}
                }};
                window.{REGISTRY}[{id}] = {{ handler, stop }};
                window.addEventListener("keydown", handler);
            }});
            "#,
            predicate = self.binding.js_predicate(),
            id = self.id,
        )
    }

    /// Script that unregisters the handler and ends the install script.
    pub fn remove_script(&self) -> String {
        format!(
            r#"
            const entry = window.{REGISTRY} && window.{REGISTRY}[{id}];
            if (entry) {{
                window.removeEventListener("keydown", entry.handler);
                delete window.{REGISTRY}[{id}];
                entry.stop();
            }}
            "#,
            id = self.id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingHost {
        scripts: RefCell<Vec<String>>,
    }

    impl ScriptHost for RecordingHost {
        type Handle = usize;

        fn run(&self, script: &str) -> usize {
            let mut scripts = self.scripts.borrow_mut();
            scripts.push(script.to_string());
            scripts.len()
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let a = KeydownListener::new(ShortcutBinding::palette());
        let b = KeydownListener::new(ShortcutBinding::palette());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_acquire_then_release() {
        let host = RecordingHost::default();
        let listener = KeydownListener::new(ShortcutBinding::palette());

        assert!(listener.acquire(&host).is_some());
        assert!(listener.is_active());
        assert!(listener.release(&host));
        assert!(!listener.is_active());

        let scripts = host.scripts.borrow();
        assert_eq!(scripts.len(), 2);
        assert!(scripts[0].contains("addEventListener"));
        assert!(scripts[1].contains("removeEventListener"));
    }

    #[test]
    fn test_double_acquire_installs_once() {
        let host = RecordingHost::default();
        let listener = KeydownListener::new(ShortcutBinding::palette());

        assert!(listener.acquire(&host).is_some());
        assert!(listener.acquire(&host).is_none());
        assert_eq!(host.scripts.borrow().len(), 1);
    }

    #[test]
    fn test_release_is_idempotent() {
        let host = RecordingHost::default();
        let listener = KeydownListener::new(ShortcutBinding::palette());

        assert!(!listener.release(&host));
        listener.acquire(&host);
        assert!(listener.release(&host));
        assert!(!listener.release(&host));
        assert_eq!(host.scripts.borrow().len(), 2);
    }

    #[test]
    fn test_accepts_only_while_active() {
        let host = RecordingHost::default();
        let listener = KeydownListener::new(ShortcutBinding::palette());
        let chord = KeyChord::new("k").with_ctrl();

        assert!(!listener.accepts(&chord));
        listener.acquire(&host);
        assert!(listener.accepts(&chord));
        assert!(!listener.accepts(&KeyChord::new("k")));
        listener.release(&host);
        assert!(!listener.accepts(&chord));
    }

    #[test]
    fn test_scripts_reference_same_slot() {
        let listener = KeydownListener::new(ShortcutBinding::palette());
        let slot = format!("{REGISTRY}[{}]", listener.id());

        let install = listener.install_script();
        assert!(install.contains(&slot));
        assert!(install.contains("e.preventDefault()"));
        assert!(install.contains(&ShortcutBinding::palette().js_predicate()));
        assert!(listener.remove_script().contains(&slot));
    }
}

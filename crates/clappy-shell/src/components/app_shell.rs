//! Root shell component.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::listener::{KeydownListener, Webview};
use crate::shortcut::{KeyChord, ShortcutBinding};
use crate::state::{ShellEvent, ShellState};
use crate::theme::ThemedRoot;

use super::{CommandPalette, Logo};

pub const SHELL_CAPTION: &str = "CLAppy";

/// Root application component.
#[component]
pub fn AppShell() -> Element {
    let mut shell = use_signal(ShellState::new);
    let theme = use_memo(move || shell.read().theme);

    // Mark <html> on mount and on every theme change
    use_effect(move || {
        let theme = theme();
        document::eval(&theme.root_marker_script());
    });

    let listener = use_hook(|| Rc::new(KeydownListener::new(ShortcutBinding::palette())));

    // Bridge chords from the window listener into shell state
    use_future({
        let listener = listener.clone();
        move || {
            let listener = listener.clone();
            let mut shell = shell;

            async move {
                let Some(mut bridge) = listener.acquire(&Webview) else {
                    return;
                };

                while let Ok(payload) = bridge.recv::<serde_json::Value>().await {
                    match serde_json::from_value::<KeyChord>(payload) {
                        Ok(chord) if listener.accepts(&chord) => {
                            shell.write().apply(ShellEvent::PaletteShortcut);
                        }
                        Ok(chord) => tracing::debug!(?chord, "ignoring keydown"),
                        Err(e) => tracing::warn!(error = %e, "malformed keydown payload"),
                    }
                }

                tracing::debug!(id = %listener.id(), "keydown bridge closed");
            }
        }
    });

    use_drop(move || {
        listener.release(&Webview);
    });

    let mut dispatch = move |event: ShellEvent| {
        shell.write().apply(event);
    };

    let state = shell.read().clone();

    rsx! {
        ThemedRoot {
            theme: state.theme,

            div {
                class: "shell",

                Logo {
                    theme: state.theme,
                    spin: state.spin,
                    on_click: move |_| dispatch(ShellEvent::LogoClicked),
                }

                div {
                    class: "shell-caption",
                    "{SHELL_CAPTION}"
                }

                CommandPalette {
                    state: state.palette,
                    on_event: move |event| dispatch(event),
                }
            }
        }
    }
}

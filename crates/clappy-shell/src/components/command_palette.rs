//! Command palette overlay.

use dioxus::prelude::*;

use crate::state::{PaletteState, ShellEvent};

pub const PALETTE_PLACEHOLDER: &str = "Type a command";

/// Clickable areas of the overlay, innermost last.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteRegion {
    Backdrop,
    Panel,
}

/// Outcome of a click landing on a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionClick {
    pub event: ShellEvent,
    pub stops_propagation: bool,
}

impl PaletteRegion {
    pub fn click(&self) -> RegionClick {
        match self {
            PaletteRegion::Backdrop => RegionClick {
                event: ShellEvent::BackdropClicked,
                stops_propagation: false,
            },
            PaletteRegion::Panel => RegionClick {
                event: ShellEvent::PanelClicked,
                stops_propagation: true,
            },
        }
    }
}

/// Dimmed backdrop with a single inert input.
///
/// Not rendered at all while `state` is closed. Clicks inside the panel stop
/// at the panel and never reach the backdrop.
#[component]
pub fn CommandPalette(state: PaletteState, on_event: EventHandler<ShellEvent>) -> Element {
    if !state.is_open() {
        return rsx! {};
    }

    let handle = move |region: PaletteRegion, e: MouseEvent| {
        let click = region.click();
        if click.stops_propagation {
            e.stop_propagation();
        }
        on_event.call(click.event);
    };

    rsx! {
        div {
            class: "palette-backdrop",
            onclick: move |e| handle(PaletteRegion::Backdrop, e),

            div {
                class: "palette-panel",
                onclick: move |e| handle(PaletteRegion::Panel, e),

                input {
                    class: "palette-input",
                    r#type: "text",
                    placeholder: PALETTE_PLACEHOLDER,
                    autofocus: true,
                    onmounted: move |evt| async move {
                        if let Err(e) = evt.set_focus(true).await {
                            tracing::debug!("palette input focus failed: {:?}", e);
                        }
                    },
                }
            }
        }
    }
}

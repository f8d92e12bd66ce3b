//! Theme-toggling logo.

use dioxus::prelude::*;

use crate::state::{LogoSpin, ThemeMode};

pub const LOGO_ALT: &str = "CLAppy logo";

/// Clickable logo. Shows the artwork that contrasts with `theme` and spins
/// once per click.
#[component]
pub fn Logo(theme: ThemeMode, spin: LogoSpin, on_click: EventHandler<()>) -> Element {
    rsx! {
        img {
            class: "logo {spin.css_class()}",
            src: "{theme.logo_src()}",
            alt: LOGO_ALT,
            onclick: move |_| on_click.call(()),
        }
    }
}

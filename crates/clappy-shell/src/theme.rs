//! Theme rendering: document-root marker, themed wrapper, logo selection.

use dioxus::prelude::*;

use crate::assets;
use crate::shortcut::js_string;
use crate::state::ThemeMode;

/// The two logo artworks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoVariant {
    /// Pale artwork, drawn for dark backgrounds.
    Light,
    /// Dark artwork, drawn for light backgrounds.
    Dark,
}

impl LogoVariant {
    /// Data URL of the embedded image.
    pub fn src(&self) -> &'static str {
        assets::logo_data_url(*self)
    }
}

impl ThemeMode {
    /// Logo artwork shown in this mode: always the contrasting variant.
    pub fn logo(&self) -> LogoVariant {
        match self {
            ThemeMode::Dark => LogoVariant::Light,
            ThemeMode::Light => LogoVariant::Dark,
        }
    }

    pub fn logo_src(&self) -> &'static str {
        self.logo().src()
    }

    /// Script that marks `<html>` with this mode's class.
    pub fn root_marker_script(&self) -> String {
        format!(
            "document.documentElement.className = {};",
            js_string(self.css_value())
        )
    }
}

/// Themed root wrapper component.
#[component]
pub fn ThemedRoot(theme: ThemeMode, children: Element) -> Element {
    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}

//! Embedded assets: logo artwork, stylesheet and the index document.

use std::sync::LazyLock;

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::theme::LogoVariant;

/// Shell CSS embedded at compile time.
pub const SHELL_CSS: &str = include_str!("../assets/shell.css");

/// Id of the element the app is mounted into.
pub const MOUNT_ID: &str = "root";

const LOGO_LIGHT_SVG: &str = include_str!("../assets/logo-light.svg");
const LOGO_DARK_SVG: &str = include_str!("../assets/logo-dark.svg");

static LOGO_LIGHT_URL: LazyLock<String> = LazyLock::new(|| svg_data_url(LOGO_LIGHT_SVG));
static LOGO_DARK_URL: LazyLock<String> = LazyLock::new(|| svg_data_url(LOGO_DARK_SVG));

fn svg_data_url(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg.as_bytes()))
}

/// Data URL for one of the logo variants.
pub fn logo_data_url(variant: LogoVariant) -> &'static str {
    match variant {
        LogoVariant::Light => LOGO_LIGHT_URL.as_str(),
        LogoVariant::Dark => LOGO_DARK_URL.as_str(),
    }
}

/// Index document for the webview, with the stylesheet inlined and a mount
/// element carrying `mount_id`.
pub fn index_document(mount_id: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html class="dark">
  <head>
    <meta charset="utf-8">
    <title>CLAppy</title>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>{SHELL_CSS}</style>
  </head>
  <body>
    <div id="{mount_id}"></div>
  </body>
</html>
"#
    )
}

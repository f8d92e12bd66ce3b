//! Desktop window setup.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

use crate::assets::{SHELL_CSS, index_document};
use crate::config::LaunchConfig;
use crate::error::{ShellError, ShellResult};

/// Fails unless `html` contains an element with `id`.
pub fn ensure_mount_point(html: &str, id: &str) -> ShellResult<()> {
    let double = format!(r#"id="{id}""#);
    let single = format!("id='{id}'");
    if html.contains(&double) || html.contains(&single) {
        Ok(())
    } else {
        Err(ShellError::MissingMountPoint { id: id.to_string() })
    }
}

/// Inlines the shell stylesheet into a user-supplied document.
fn with_shell_styles(html: &str) -> String {
    let style = format!("<style>{SHELL_CSS}</style>");
    match html.find("</head>") {
        Some(pos) => format!("{}{}{}", &html[..pos], style, &html[pos..]),
        None => format!("{style}{html}"),
    }
}

/// Resolves the index document: the custom file when configured, otherwise
/// the built-in one. Either way it must contain the mount element.
pub fn load_index(config: &LaunchConfig) -> ShellResult<String> {
    let index = match &config.index {
        Some(path) => {
            let html = std::fs::read_to_string(path).map_err(|source| ShellError::ReadIndex {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(path = %path.display(), "using custom index document");
            with_shell_styles(&html)
        }
        None => index_document(&config.mount_id),
    };

    ensure_mount_point(&index, &config.mount_id)?;
    Ok(index)
}

/// Builds the desktop config, checking the mount point before anything is
/// rendered.
pub fn desktop_config(config: &LaunchConfig) -> ShellResult<Config> {
    config.validate()?;

    let index = load_index(config)?;

    let window = WindowBuilder::new()
        .with_title(&config.title)
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .with_maximized(config.maximized);

    Ok(Config::new()
        .with_window(window)
        .with_custom_index(index)
        .with_root_name(config.mount_id.clone()))
}

//! Launch configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::assets::MOUNT_ID;
use crate::error::{ShellError, ShellResult};

pub const DEFAULT_TITLE: &str = "CLAppy";
pub const DEFAULT_WIDTH: f64 = 900.0;
pub const DEFAULT_HEIGHT: f64 = 640.0;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "clappy-shell")]
#[command(about = "CLAppy desktop shell")]
pub struct Args {
    /// Window title
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Window inner width in logical pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: f64,

    /// Window inner height in logical pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: f64,

    /// Start with the window maximized
    #[arg(long)]
    pub maximized: bool,

    /// HTML file to use as the index document instead of the built-in one
    #[arg(long)]
    pub index: Option<PathBuf>,

    /// Id of the element the app is mounted into
    #[arg(long, default_value = MOUNT_ID)]
    pub mount_id: String,
}

/// Validated window and document settings.
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub maximized: bool,
    /// Custom index document; the built-in one is used when `None`.
    pub index: Option<PathBuf>,
    /// Id of the mount element in the index document.
    pub mount_id: String,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            maximized: false,
            index: None,
            mount_id: MOUNT_ID.to_string(),
        }
    }
}

impl LaunchConfig {
    pub fn validate(&self) -> ShellResult<()> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(self.width) || !valid(self.height) {
            return Err(ShellError::InvalidWindowSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl TryFrom<Args> for LaunchConfig {
    type Error = ShellError;

    fn try_from(args: Args) -> ShellResult<Self> {
        let config = Self {
            title: args.title,
            width: args.width,
            height: args.height,
            maximized: args.maximized,
            index: args.index,
            mount_id: args.mount_id,
        };
        config.validate()?;
        Ok(config)
    }
}

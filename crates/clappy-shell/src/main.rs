//! Entry point for the CLAppy desktop shell.

use std::process::ExitCode;

use clap::Parser;

use clappy_shell::{AppShell, Args, LaunchConfig, launch, logging};

fn main() -> ExitCode {
    logging::init();

    let args = Args::parse();

    let config = match LaunchConfig::try_from(args).and_then(|c| launch::desktop_config(&c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to set up shell");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Starting CLAppy shell");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(AppShell);

    ExitCode::SUCCESS
}

//! `clawtank` - terminal client for the ClawTank multiplayer coding platform
//!
//! Room commands are placeholders for now; `replay` plays a recorded session
//! back in the terminal.

use std::path::Path;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use console::Style;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{rooms, Cli, Commands};
use clawtank_core::config::Config;
use clawtank_core::replay::{self, Pacing, Renderer};
use clawtank_core::Palette;

mod cli;

/// Main entry point for the ClawTank CLI
#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    if cli.version {
        println!("{}", version_line(&Style::new().blue()));
        return Ok(());
    }

    let config = Config::load_or_default();
    let palette = Palette::for_mode(config.replay.color);

    match cli.command {
        None => print_help(&palette)?,
        Some(Commands::Join { room_url }) => rooms::join(&palette, &room_url).await,
        Some(Commands::Create { name }) => rooms::create(&palette, &name).await,
        Some(Commands::Status) => rooms::status(&palette),
        Some(Commands::Replay {
            file,
            speed,
            max_delay,
            instant,
            no_color,
        }) => {
            let mut pacing = config.replay.pacing();
            if let Some(speed) = speed {
                pacing.scale_factor = speed.max(0.0);
            }
            if let Some(max_delay) = max_delay {
                pacing.max_delay_ms = max_delay;
            }
            if instant {
                pacing = Pacing::instant();
            }
            let palette = if no_color { Palette::plain() } else { palette };

            handle_replay(&file, pacing, palette).await;
        }
    }

    Ok(())
}

/// Run a replay and exit non-zero on any failure
async fn handle_replay(file: &Path, pacing: Pacing, palette: Palette) {
    let red = palette.red.clone();

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    tracing::debug!("Replaying {} with {:?}", file.display(), pacing);
    let result = replay::replay_file(
        file,
        std::io::stdout(),
        pacing,
        Renderer::new(palette),
        &cancel,
    )
    .await;

    if let Err(e) = result {
        eprintln!("{} {}", red.apply_to("Error:"), e);
        std::process::exit(e.exit_code());
    }
}

/// `clawtank v<version> (<rev>)`, where rev comes from the build script
fn version_line(name_style: &Style) -> String {
    format!(
        "{} v{} ({})",
        name_style.apply_to("clawtank"),
        env!("CARGO_PKG_VERSION"),
        env!("CLAWTANK_REV")
    )
}

fn print_help(palette: &Palette) -> Result<()> {
    for line in Renderer::new(palette.clone()).banner() {
        println!("{}", line);
    }
    Cli::command().print_help()?;
    Ok(())
}

/// Diagnostics go to stderr so they never mix with playback on stdout
fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("CLAWTANK_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_line() {
        let line = version_line(&Style::new().force_styling(false));
        assert!(line.starts_with(&format!("clawtank v{} (", env!("CARGO_PKG_VERSION"))));
        assert!(line.ends_with(')'));
        assert!(!env!("CLAWTANK_REV").is_empty());
    }
}

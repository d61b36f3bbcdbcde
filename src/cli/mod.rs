//! CLI argument parsing using clap 4.x derive macros

pub mod rooms;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

const EXAMPLES: &str = "\
Examples:
  clawtank join https://clawtank.dev/rooms/build-something
  clawtank create my-project
  clawtank replay session.json";

/// Multiplayer AI-assisted coding platform
///
/// Join rooms where humans and agents build together, or replay a recorded
/// session in your terminal.
#[derive(Parser, Debug)]
#[command(name = "clawtank")]
#[command(author, about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Show version number
    #[arg(short = 'v', long)]
    pub version: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Connect to an existing room
    Join {
        /// Room URL
        room_url: String,
    },

    /// Create a new room
    Create {
        /// Room name
        name: String,
    },

    /// Show current agent status
    Status,

    /// Play back a session recording
    Replay {
        /// Recorded session (JSON)
        file: PathBuf,

        /// Milliseconds of playback per recorded second
        #[arg(long, value_name = "MS")]
        speed: Option<f64>,

        /// Longest single pause between events, in milliseconds
        #[arg(long, value_name = "MS")]
        max_delay: Option<u64>,

        /// Print every event without pausing
        #[arg(long, conflicts_with = "speed")]
        instant: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

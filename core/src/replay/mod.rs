//! Session replay engine
//!
//! Loads a recorded room transcript and plays it back as a paced, colorized
//! event stream.

pub mod event;
pub mod pacing;
pub mod player;
pub mod render;
pub mod session;


pub use event::EventKind;
pub use pacing::{Pacing, DEFAULT_MAX_DELAY_MS, DEFAULT_SCALE_FACTOR};
pub use player::{PlaybackSummary, Player};
pub use render::Renderer;
pub use session::{AgentInfo, Event, Participants, Session, SessionMeta};

use std::io::Write;
use std::path::Path;

use tokio_util::sync::CancellationToken;

use crate::error::Result;

/// Load a transcript and play it to `out`
///
/// Loading errors surface before anything is written.
pub async fn replay_file<P, W>(
    path: P,
    out: W,
    pacing: Pacing,
    renderer: Renderer,
    cancel: &CancellationToken,
) -> Result<PlaybackSummary>
where
    P: AsRef<Path>,
    W: Write,
{
    let session = Session::load(path)?;
    Player::new(out, pacing, renderer).play(&session, cancel).await
}

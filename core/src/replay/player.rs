//! Playback driver
//!
//! Writes the header, then walks the events in document order: wait, render,
//! emit. The only suspension point is the inter-event wait, which races a
//! cancellation token so an interrupt never leaves a pending timer behind.

use std::io::Write;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::pacing::Pacing;
use super::render::Renderer;
use super::session::Session;
use crate::error::{ReplayError, Result};

/// Outcome of a completed playback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackSummary {
    pub events_played: usize,
    pub total_wait: Duration,
}

pub struct Player<W: Write> {
    pacing: Pacing,
    renderer: Renderer,
    out: W,
}

impl<W: Write> Player<W> {
    pub fn new(out: W, pacing: Pacing, renderer: Renderer) -> Self {
        Self {
            pacing,
            renderer,
            out,
        }
    }

    /// Give back the output sink
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Replay a whole session to the sink
    ///
    /// Lines already written stay written when an event fails to render or
    /// the token is cancelled.
    pub async fn play(
        &mut self,
        session: &Session,
        cancel: &CancellationToken,
    ) -> Result<PlaybackSummary> {
        let header = self.renderer.header(&session.meta);
        self.emit(&header)?;

        let mut summary = PlaybackSummary::default();
        let mut last_t = 0.0;

        for event in &session.events {
            let wait = self.pacing.delay(last_t, event.t);
            debug!("Event '{}' at t={} waits {:?}", event.kind, event.t, wait);
            self.wait(wait, cancel).await?;
            summary.total_wait += wait;

            let line = self.renderer.render_line(event)?;
            self.emit(std::slice::from_ref(&line))?;

            summary.events_played += 1;
            last_t = event.t;
        }

        let footer = self.renderer.footer();
        self.emit(&footer)?;

        info!(
            "Played {} events from '{}' in {:?} of waiting",
            summary.events_played, session.meta.room, summary.total_wait
        );
        Ok(summary)
    }

    async fn wait(&self, duration: Duration, cancel: &CancellationToken) -> Result<()> {
        if cancel.is_cancelled() {
            return Err(ReplayError::Interrupted);
        }
        if duration.is_zero() {
            return Ok(());
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ReplayError::Interrupted),
            _ = tokio::time::sleep(duration) => Ok(()),
        }
    }

    fn emit(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

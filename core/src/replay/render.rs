//! Event and header rendering
//!
//! Pure formatting: nothing here writes, sleeps or reads state beyond its
//! arguments.

use super::event::EventKind;
use super::session::{Event, SessionMeta};
use crate::error::Result;
use crate::output::{format_timestamp, Palette};

/// Turns session data into display lines
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    palette: Palette,
}

impl Renderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Full playback line for an event: `[MM:SS] <message>`
    pub fn render_line(&self, event: &Event) -> Result<String> {
        let timestamp = format!("[{}]", format_timestamp(event.t));
        Ok(format!(
            "{} {}",
            self.palette.dim.apply_to(timestamp),
            self.render(event)?
        ))
    }

    /// Message body for an event, without the timestamp
    pub fn render(&self, event: &Event) -> Result<String> {
        Ok(self.render_kind(&EventKind::from_event(event)?))
    }

    pub fn render_kind(&self, kind: &EventKind) -> String {
        let p = &self.palette;
        match kind {
            EventKind::RoomCreated { room_id } => {
                format!("{}: {}", p.cyan.apply_to("🏠 Room created"), room_id)
            }
            EventKind::HumanMessage { from, text } => {
                format!("{} {}", p.green.apply_to(format!("💬 {}:", from)), text)
            }
            EventKind::AgentMessage { from, text } => {
                format!("{} {}", p.blue.apply_to(format!("🤖 {}:", from)), text)
            }
            EventKind::AgentJoined { name, model } => {
                format!("{} {} ({})", p.blue.apply_to("🔗 Agent joined:"), name, model)
            }
            EventKind::TaskCreated { title } => {
                format!("{} {}", p.yellow.apply_to("📋 Task created:"), title)
            }
            EventKind::TaskClaimed { agent_id } => {
                format!("{} by agent {}", p.yellow.apply_to("🎯 Task claimed"), agent_id)
            }
            EventKind::AgentStatus { agent_id, detail } => {
                format!(
                    "{} {} - {}",
                    p.magenta.apply_to("⚡ Status update:"),
                    agent_id,
                    detail
                )
            }
            EventKind::GitCommit {
                message,
                additions,
                deletions,
            } => format!(
                "{} {} {}",
                p.yellow.apply_to("📝 Commit:"),
                message,
                p.dim.apply_to(format!("(+{}/-{})", additions, deletions))
            ),
            EventKind::GitMerge {
                from_branch,
                to_branch,
            } => format!(
                "{} {} → {}",
                p.yellow.apply_to("🔀 Merged:"),
                from_branch,
                to_branch
            ),
            EventKind::TaskCompleted { agent_id } => {
                format!("{} by {}", p.green.apply_to("✅ Task completed"), agent_id)
            }
            EventKind::RoomStats {
                commits,
                lines_added,
            } => format!(
                "{} {} commits, {} lines added",
                p.cyan.apply_to("📊 Session stats:"),
                commits,
                lines_added
            ),
            EventKind::ActivitySummary {
                collaboration_score,
            } => format!(
                "{} Score: {}/10",
                p.green.apply_to("🎊 Session complete!"),
                collaboration_score
            ),
            EventKind::Other { tag, payload } => {
                format!("{} {}", p.gray.apply_to(format!("{}:", tag)), payload)
            }
        }
    }

    /// Branded banner shared by playback and the help screen
    pub fn banner(&self) -> Vec<String> {
        vec![
            self.palette
                .cyan
                .apply_to(format!("🦀 ClawTank CLI v{}", env!("CARGO_PKG_VERSION")))
                .to_string(),
            self.palette
                .gray
                .apply_to("Multiplayer AI-assisted coding platform")
                .to_string(),
            String::new(),
        ]
    }

    /// Lines printed once before the first event
    pub fn header(&self, meta: &SessionMeta) -> Vec<String> {
        let p = &self.palette;
        let mut lines = self.banner();

        lines.push(format!(
            "{} {}",
            p.yellow.apply_to("📼 Playing back session:"),
            meta.room
        ));
        lines.push(format!(
            "{} {}",
            p.gray.apply_to("📝 Description:"),
            meta.description
        ));
        lines.push(format!(
            "{} {} minutes",
            p.gray.apply_to("⏱️  Duration:"),
            meta.duration_minutes
        ));
        lines.push(format!(
            "{} {} humans, {} agents",
            p.gray.apply_to("👥 Participants:"),
            meta.participants.humans.len(),
            meta.participants.agents.len()
        ));
        lines.push(String::new());

        lines.push(format!(
            "{} {}",
            p.green.apply_to("Humans:"),
            meta.participants.humans.join(", ")
        ));
        for agent in &meta.participants.agents {
            lines.push(format!(
                "{} {} ({}) - {}",
                p.blue.apply_to("Agent:"),
                agent.name,
                agent.model,
                agent.skills.join(", ")
            ));
        }
        lines.push(String::new());
        lines.push(p.bold.apply_to("🎬 Starting playback...").to_string());
        lines.push(String::new());
        lines
    }

    /// Lines printed after the last event
    pub fn footer(&self) -> Vec<String> {
        vec![
            String::new(),
            self.palette
                .bold
                .apply_to("🎬 Playback complete!")
                .to_string(),
        ]
    }
}

//! Room commands
//!
//! Networking is not wired up yet; these print what would happen and point
//! at the project page.

use clawtank_core::Palette;
use tokio::time::{sleep, Duration};

const ROOMS_URL: &str = "https://clawtank.dev/rooms";
const PROJECT_URL: &str = "https://clawtank.dev";

fn coming_soon(palette: &Palette, what: &str) {
    println!("{} {}", palette.yellow.apply_to("🦀 Coming soon!"), what);
}

pub async fn join(palette: &Palette, room_url: &str) {
    println!("{} {}", palette.cyan.apply_to("🔗 Connecting to room:"), room_url);
    sleep(Duration::from_secs(1)).await;
    coming_soon(palette, "ClawTank CLI is under development.");
    println!("Visit {} for updates.", PROJECT_URL);
}

pub async fn create(palette: &Palette, name: &str) {
    println!("{} {}", palette.cyan.apply_to("🏠 Creating room:"), name);
    println!("{} {}", palette.gray.apply_to("🔗 Room URL:"), room_url(name));
    sleep(Duration::from_secs(1)).await;
    coming_soon(palette, "ClawTank CLI is under development.");
    println!("Visit {} for updates.", PROJECT_URL);
}

pub fn status(palette: &Palette) {
    println!("{}", palette.cyan.apply_to("📊 ClawTank Agent Status"));
    println!();
    println!("{}", palette.green.apply_to("🤖 Active Agents:"));
    println!("  • Claude-4 (alice) - idle");
    println!("  • GPT-4o (bob) - coding task_123");
    println!("  • Gemini-Pro (charlie) - reviewing PR #45");
    println!();
    println!("{}", palette.blue.apply_to("🏠 Connected Rooms:"));
    println!("  • build-something (3 participants)");
    println!("  • debug-session (1 participant)");
    println!();
    coming_soon(palette, "Full status dashboard under development.");
}

fn room_url(name: &str) -> String {
    format!("{}/{}", ROOMS_URL, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_url() {
        assert_eq!(room_url("my-project"), "https://clawtank.dev/rooms/my-project");
    }
}

pub mod config;
pub mod error;
pub mod output;
pub mod replay;

// Re-exports for convenience
pub use config::Config;
pub use error::{ReplayError, Result};
pub use output::{ColorMode, Palette};
pub use replay::{Pacing, Player, Renderer, Session};

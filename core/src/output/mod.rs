//! Output styling module
//!
//! Colors and timestamp formatting shared by the header, the event renderer
//! and the binary's placeholder commands.

use console::Style;

/// Whether styled output should be produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Let the terminal decide
    #[default]
    Auto,
    /// Always emit escape codes
    Always,
    /// Never emit escape codes
    Never,
}

/// Set of styles used for terminal output
#[derive(Debug, Clone)]
pub struct Palette {
    pub cyan: Style,
    pub green: Style,
    pub blue: Style,
    pub yellow: Style,
    pub magenta: Style,
    pub red: Style,
    pub gray: Style,
    pub dim: Style,
    pub bold: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Self::colored()
    }
}

impl Palette {
    /// Styles that follow `console`'s terminal detection
    pub fn colored() -> Self {
        Self::build(None)
    }

    /// Styles that always emit escape codes
    pub fn forced() -> Self {
        Self::build(Some(true))
    }

    /// Styles that never emit escape codes
    pub fn plain() -> Self {
        Self::build(Some(false))
    }

    pub fn for_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => Self::colored(),
            ColorMode::Always => Self::forced(),
            ColorMode::Never => Self::plain(),
        }
    }

    fn build(force: Option<bool>) -> Self {
        let style = |base: Style| match force {
            Some(on) => base.force_styling(on),
            None => base,
        };

        Self {
            cyan: style(Style::new().cyan()),
            green: style(Style::new().green()),
            blue: style(Style::new().blue()),
            yellow: style(Style::new().yellow()),
            magenta: style(Style::new().magenta()),
            red: style(Style::new().red()),
            gray: style(Style::new().black().bright()),
            dim: style(Style::new().dim()),
            bold: style(Style::new().bold()),
        }
    }
}

/// Format a session offset in seconds as `MM:SS`
///
/// Minutes are not wrapped at 60. Fractional seconds are truncated and a
/// negative offset is shown as the negated absolute value.
pub fn format_timestamp(seconds: f64) -> String {
    let sign = if seconds < 0.0 { "-" } else { "" };
    let whole = seconds.abs().trunc() as u64;
    format!("{}{:02}:{:02}", sign, whole / 60, whole % 60)
}

//! Output handling for the autosync binary: terminal capability detection
//! and rendering of watch events as timestamped, colored log lines.

mod terminal;
pub mod watch;

use crate::cli::ColorWhen;

use self::terminal::detect_capabilities;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub color: bool,
}

impl UiContext {
    pub fn new(cli_color: Option<ColorWhen>) -> Self {
        let caps = detect_capabilities();

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => caps.supports_color && !caps.is_ci,
        };

        Self { color }
    }
}

//! Terminal spinner shown while the completion call is outstanding.
//!
//! Pure UX layer: spinner failures never block the call itself. Only shown
//! when stdout is a TTY and NO_COLOR is unset, so piped output stays clean.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

/// Spinner wrapper that degrades to nothing outside a TTY.
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    /// Start a spinner with the given message.
    pub fn start(message: &str) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let no_color = std::env::var("NO_COLOR").is_ok();

        if !is_tty || no_color {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner} {msg}");
        if let Ok(style) = style {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar: Some(bar) }
    }

    /// Stop the spinner and clear its line.
    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}

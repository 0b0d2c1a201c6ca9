//! User-facing output.
//!
//! One [`Reporter`] per invocation prints the styled status lines the tool
//! emits outside its interactive stages. Color is used only when stdout is
//! a tty with `TERM` set; errors go to stderr.

use std::io::{self, IsTerminal};

use crate::ui::Theme;

/// Prints styled status lines.
#[derive(Debug)]
pub struct Reporter {
    theme: Theme,
    colored: bool,
}

impl Reporter {
    /// Create a reporter, detecting whether color should be used.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            colored: Self::should_use_color(),
        }
    }

    /// Create a reporter that never colors, for captured output.
    pub fn plain(theme: Theme) -> Self {
        Self {
            theme,
            colored: false,
        }
    }

    fn should_use_color() -> bool {
        io::stdout().is_terminal() && std::env::var("TERM").is_ok()
    }

    /// Print an informational line.
    pub fn info(&self, message: &str) {
        if self.colored {
            println!("{}", self.theme.heading(message));
        } else {
            println!("{message}");
        }
    }

    /// Print a success line.
    pub fn success(&self, message: &str) {
        if self.colored {
            println!("{}", self.theme.chosen(message));
        } else {
            println!("{message}");
        }
    }

    /// Print an error line to stderr.
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("{}", self.theme.alert(message));
        } else {
            eprintln!("{message}");
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_does_not_panic() {
        let reporter = Reporter::plain(Theme::default());
        reporter.info("info line");
        reporter.success("success line");
        reporter.error("error line");
    }
}

//! Presentation configuration for the interactive views.

use crossterm::style::{Color, Stylize};

/// Immutable color palette handed to every `view` call.
///
/// Constructed once per invocation and passed by reference; views never
/// mutate it.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Headings and general copy.
    pub info: Color,
    /// Cursor markers and key hints.
    pub focused: Color,
    /// Chosen rows and success accents.
    pub selected: Color,
    /// Failure copy.
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            info: Color::Rgb {
                r: 0x5d,
                g: 0xd2,
                b: 0xfc,
            },
            focused: Color::Rgb {
                r: 0xfc,
                g: 0xbd,
                b: 0x5f,
            },
            selected: Color::Rgb {
                r: 0xfc,
                g: 0x89,
                b: 0x5f,
            },
            error: Color::Rgb {
                r: 0xba,
                g: 0x0b,
                b: 0x0b,
            },
        }
    }
}

impl Theme {
    /// Render `text` as a heading.
    pub fn heading(&self, text: &str) -> String {
        format!("{}", text.with(self.info).bold())
    }

    /// Render `text` as a key hint or cursor marker.
    pub fn hint(&self, text: &str) -> String {
        format!("{}", text.with(self.focused).bold())
    }

    /// Render `text` as a chosen item.
    pub fn chosen(&self, text: &str) -> String {
        format!("{}", text.with(self.selected).bold())
    }

    /// Render `text` as failure copy.
    pub fn alert(&self, text: &str) -> String {
        format!("{}", text.with(self.error).bold())
    }

    /// Render `text` dimmed, for placeholders and blurred controls.
    pub fn dim(&self, text: &str) -> String {
        format!("{}", text.dim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styled_text_keeps_content() {
        let theme = Theme::default();
        assert!(theme.heading("hello").contains("hello"));
        assert!(theme.hint(">").contains('>'));
        assert!(theme.chosen("a.pdf").contains("a.pdf"));
        assert!(theme.alert("bad").contains("bad"));
    }
}

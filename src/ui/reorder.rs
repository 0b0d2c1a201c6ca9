//! The reordering list.
//!
//! Lets the user rearrange an already-chosen sequence before merging, since
//! merge order decides page order in the output. `j`/`k` move the cursor
//! alone; the arrow keys move the item under the cursor and carry the
//! cursor with it.

use crossterm::event::{KeyCode, KeyEvent};

use super::{Model, Theme, is_cancel_key};

/// Terminal result of the reorder stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// The user confirmed the (possibly rearranged) sequence.
    Confirmed(Vec<String>),
    /// The user backed out.
    Cancelled,
}

/// Reorderable list state.
#[derive(Debug)]
pub struct ReorderModel {
    items: Vec<String>,
    cursor: usize,
}

impl ReorderModel {
    /// Build the list over the already-selected items.
    pub fn new(items: Vec<String>) -> Self {
        Self { items, cursor: 0 }
    }

    fn navigate_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    fn navigate_down(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
    }

    fn move_item_up(&mut self) {
        if self.cursor > 0 {
            self.items.swap(self.cursor, self.cursor - 1);
            self.cursor -= 1;
        }
    }

    fn move_item_down(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.items.swap(self.cursor, self.cursor + 1);
            self.cursor += 1;
        }
    }
}

impl Model for ReorderModel {
    type Outcome = ReorderOutcome;

    fn update(&mut self, key: KeyEvent) -> Option<ReorderOutcome> {
        if is_cancel_key(&key) {
            return Some(ReorderOutcome::Cancelled);
        }

        match key.code {
            KeyCode::Char('k') => self.navigate_up(),
            KeyCode::Char('j') => self.navigate_down(),
            KeyCode::Up => self.move_item_up(),
            KeyCode::Down => self.move_item_down(),
            KeyCode::Enter => return Some(ReorderOutcome::Confirmed(self.items.clone())),
            _ => {}
        }

        None
    }

    fn view(&self, theme: &Theme) -> String {
        let mut out = String::new();

        out.push_str(&theme.heading("Reorder the PDFs:"));
        out.push('\n');
        out.push_str(&theme.hint(
            "Navigate with 'j/k', move the highlighted file with Up/Down.",
        ));
        out.push_str("\n\n");

        for (i, item) in self.items.iter().enumerate() {
            if i == self.cursor {
                out.push_str(&format!("{} {}\n", theme.hint(">"), theme.hint(item)));
            } else {
                out.push_str(&format!("  {}\n", theme.heading(item)));
            }
        }

        out.push('\n');
        out.push_str(&theme.hint("Press Enter to confirm, Esc to cancel."));
        out.push('\n');

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::press;

    fn model(names: &[&str]) -> ReorderModel {
        ReorderModel::new(names.iter().map(|s| s.to_string()).collect())
    }

    fn items(m: &ReorderModel) -> Vec<&str> {
        m.items.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_move_first_item_up_is_noop() {
        let mut m = model(&["a.pdf", "b.pdf"]);
        m.update(press(KeyCode::Up));
        assert_eq!(items(&m), vec!["a.pdf", "b.pdf"]);
        assert_eq!(m.cursor, 0);
    }

    #[test]
    fn test_move_last_item_down_is_noop() {
        let mut m = model(&["a.pdf", "b.pdf"]);
        m.update(press(KeyCode::Char('j')));
        m.update(press(KeyCode::Down));
        assert_eq!(items(&m), vec!["a.pdf", "b.pdf"]);
        assert_eq!(m.cursor, 1);
    }

    #[test]
    fn test_move_down_carries_cursor_with_item() {
        let mut m = model(&["a.pdf", "b.pdf", "c.pdf"]);
        m.update(press(KeyCode::Down));
        assert_eq!(items(&m), vec!["b.pdf", "a.pdf", "c.pdf"]);
        assert_eq!(m.cursor, 1);
    }

    #[test]
    fn test_opposite_move_inverts() {
        let mut m = model(&["a.pdf", "b.pdf", "c.pdf"]);
        m.update(press(KeyCode::Down));
        m.update(press(KeyCode::Up));
        assert_eq!(items(&m), vec!["a.pdf", "b.pdf", "c.pdf"]);
        assert_eq!(m.cursor, 0);
    }

    #[test]
    fn test_navigation_does_not_move_items() {
        let mut m = model(&["a.pdf", "b.pdf", "c.pdf"]);
        m.update(press(KeyCode::Char('j')));
        m.update(press(KeyCode::Char('j')));
        m.update(press(KeyCode::Char('k')));
        assert_eq!(items(&m), vec!["a.pdf", "b.pdf", "c.pdf"]);
        assert_eq!(m.cursor, 1);
    }

    #[test]
    fn test_confirm_returns_current_order() {
        let mut m = model(&["a.pdf", "b.pdf", "c.pdf"]);
        m.update(press(KeyCode::Down));
        let outcome = m.update(press(KeyCode::Enter));
        assert_eq!(
            outcome,
            Some(ReorderOutcome::Confirmed(vec![
                "b.pdf".to_string(),
                "a.pdf".to_string(),
                "c.pdf".to_string(),
            ]))
        );
    }

    #[test]
    fn test_escape_cancels() {
        let mut m = model(&["a.pdf", "b.pdf"]);
        assert_eq!(
            m.update(press(KeyCode::Esc)),
            Some(ReorderOutcome::Cancelled)
        );
    }
}

//! The selection checklist.
//!
//! Presents the candidate PDFs as a toggleable list. The chosen set is a set
//! of indices into the candidate list, so the confirmed result always comes
//! back in the candidates' original order, not the order items were toggled.

use std::collections::HashSet;

use crossterm::event::{KeyCode, KeyEvent};

use super::{Model, Theme, is_cancel_key};
use crate::op::Operation;

/// Terminal result of the selection stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The user confirmed; chosen candidates in original order.
    Confirmed(Vec<String>),
    /// The user backed out.
    Cancelled,
    /// The candidate pool was too small; no input was consumed.
    AutoRejected(String),
}

/// Checklist state over a fixed candidate list.
#[derive(Debug)]
pub struct SelectModel {
    items: Vec<String>,
    dir: String,
    op: Operation,
    cursor: usize,
    chosen: HashSet<usize>,
}

impl SelectModel {
    /// Build a checklist over `items`, displayed as living in `dir`.
    pub fn new(items: Vec<String>, dir: impl Into<String>, op: Operation) -> Self {
        Self {
            items,
            dir: dir.into(),
            op,
            cursor: 0,
            chosen: HashSet::new(),
        }
    }

    /// Chosen candidates in the list's original order.
    pub fn chosen_in_order(&self) -> Vec<String> {
        (0..self.items.len())
            .filter(|i| self.chosen.contains(i))
            .map(|i| self.items[i].clone())
            .collect()
    }

    fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    fn move_down(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
    }

    fn toggle(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if !self.chosen.remove(&self.cursor) {
            self.chosen.insert(self.cursor);
        }
    }
}

impl Model for SelectModel {
    type Outcome = SelectOutcome;

    fn pre_check(&self) -> Option<SelectOutcome> {
        self.op
            .auto_reject(self.items.len())
            .map(SelectOutcome::AutoRejected)
    }

    fn update(&mut self, key: KeyEvent) -> Option<SelectOutcome> {
        if is_cancel_key(&key) {
            return Some(SelectOutcome::Cancelled);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Char(' ') | KeyCode::Char('x') => self.toggle(),
            KeyCode::Enter => return Some(SelectOutcome::Confirmed(self.chosen_in_order())),
            _ => {}
        }

        None
    }

    fn view(&self, theme: &Theme) -> String {
        let mut out = String::new();

        out.push_str(&theme.heading(self.op.select_prompt()));
        out.push('\n');
        out.push_str(&theme.hint(
            "Select with Space or 'x', navigate with Up/Down or j/k",
        ));
        out.push_str("\n\n");
        out.push_str(&theme.chosen(&format!("File location: {}", self.dir)));
        out.push_str("\n\n");

        for (i, item) in self.items.iter().enumerate() {
            let cursor = if i == self.cursor {
                theme.hint(">")
            } else {
                " ".to_string()
            };
            let (mark, name) = if self.chosen.contains(&i) {
                (theme.chosen("x"), theme.chosen(item))
            } else {
                (" ".to_string(), theme.heading(item))
            };
            out.push_str(&format!("{cursor} [{mark}] {name}\n"));
        }

        out.push('\n');
        out.push_str(&theme.hint("Press Enter to confirm, Esc to cancel."));
        out.push('\n');

        out
    }
}

//! The masked password form.
//!
//! Two masked fields (password and confirmation) and a submit control, with
//! focus cycling over all three. Submission is gated on the fields being
//! non-empty and identical; a mismatch keeps the form active and is flagged
//! until the next edit. The true field contents are kept, only the display
//! is masked.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Model, Theme, is_cancel_key};
use crate::op::Operation;

const FIELD_COUNT: usize = 2;
const SUBMIT_INDEX: usize = 2;

/// Terminal result of the password stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordOutcome {
    /// Both fields matched; carries the password.
    Submitted(String),
    /// The user backed out.
    Cancelled,
}

/// One masked input field with a char-aware edit cursor.
#[derive(Debug)]
struct MaskedField {
    label: &'static str,
    value: String,
    cursor: usize,
}

impl MaskedField {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            cursor: 0,
        }
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_index();
        self.value.insert(at, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index();
            self.value.remove(at);
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index();
            self.value.remove(at);
        }
    }

    fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    fn move_home(&mut self) {
        self.cursor = 0;
    }

    fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    fn masked(&self) -> String {
        "*".repeat(self.char_count())
    }
}

/// Password form state.
#[derive(Debug)]
pub struct PasswordModel {
    op: Operation,
    fields: [MaskedField; FIELD_COUNT],
    focus: usize,
    mismatch: bool,
}

impl PasswordModel {
    /// Build the form; `op` only affects the prompt copy.
    pub fn new(op: Operation) -> Self {
        Self {
            op,
            fields: [
                MaskedField::new("Password"),
                MaskedField::new("Confirm Password"),
            ],
            focus: 0,
            mismatch: false,
        }
    }

    /// The password field's current content.
    pub fn password(&self) -> &str {
        &self.fields[0].value
    }

    fn submittable(&self) -> bool {
        !self.fields[0].value.is_empty() && self.fields[0].value == self.fields[1].value
    }

    fn advance_focus(&mut self) {
        self.focus = (self.focus + 1) % (FIELD_COUNT + 1);
    }

    fn retreat_focus(&mut self) {
        self.focus = (self.focus + FIELD_COUNT) % (FIELD_COUNT + 1);
    }

    fn edit_focused(&mut self, key: &KeyEvent) {
        let Some(field) = self.fields.get_mut(self.focus) else {
            return;
        };
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                field.insert(c);
                self.mismatch = false;
            }
            KeyCode::Backspace => {
                field.backspace();
                self.mismatch = false;
            }
            KeyCode::Delete => {
                field.delete();
                self.mismatch = false;
            }
            KeyCode::Left => field.move_left(),
            KeyCode::Right => field.move_right(),
            KeyCode::Home => field.move_home(),
            KeyCode::End => field.move_end(),
            _ => {}
        }
    }
}

impl Model for PasswordModel {
    type Outcome = PasswordOutcome;

    fn update(&mut self, key: KeyEvent) -> Option<PasswordOutcome> {
        if is_cancel_key(&key) {
            return Some(PasswordOutcome::Cancelled);
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.advance_focus(),
            KeyCode::BackTab | KeyCode::Up => self.retreat_focus(),
            KeyCode::Enter => {
                if self.focus == SUBMIT_INDEX {
                    if self.submittable() {
                        return Some(PasswordOutcome::Submitted(self.fields[0].value.clone()));
                    }
                    self.mismatch = true;
                } else {
                    self.advance_focus();
                }
            }
            _ => self.edit_focused(&key),
        }

        None
    }

    fn view(&self, theme: &Theme) -> String {
        let mut out = String::new();

        out.push_str(&theme.heading(&format!(
            "Input the password to {} the PDFs.",
            self.op.verb()
        )));
        out.push_str("\n\n");

        for (i, field) in self.fields.iter().enumerate() {
            let marker = if self.focus == i {
                theme.hint(">")
            } else {
                " ".to_string()
            };
            let shown = if field.value.is_empty() {
                theme.dim(field.label)
            } else {
                field.masked()
            };
            out.push_str(&format!("{marker} {}: {shown}\n", field.label));
        }

        out.push('\n');
        if self.focus == SUBMIT_INDEX {
            out.push_str(&theme.chosen("[ Submit ]"));
        } else {
            out.push_str(&format!("[ {} ]", theme.dim("Submit")));
        }
        out.push('\n');

        if self.mismatch {
            out.push('\n');
            out.push_str(&theme.alert("Passwords do not match."));
            out.push('\n');
        }

        out.push('\n');
        out.push_str(&theme.hint("Press Enter on 'Submit' to continue."));
        out.push('\n');
        out.push_str(&theme.hint("Press Esc or Ctrl+C to cancel."));
        out.push('\n');

        out
    }
}

//! Interactive terminal stages.
//!
//! Selection, reordering, and password entry all share one modal shape:
//! render a frame, block for a key, dispatch it, repeat until the model
//! reaches a terminal outcome. [`run_model`] is that loop, written once;
//! the models themselves are pure state machines with no I/O of their own,
//! which is what lets the unit tests drive them with synthetic key events.

mod password;
mod reorder;
mod select;
mod theme;

pub use password::{PasswordModel, PasswordOutcome};
pub use reorder::{ReorderModel, ReorderOutcome};
pub use select::{SelectModel, SelectOutcome};
pub use theme::Theme;

use std::io::{self, IsTerminal, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};

use crate::error::{PdfMixError, Result};

/// A modal interactive stage.
///
/// `update` consumes one key press and returns `Some(outcome)` to leave the
/// loop, `None` to keep going. `pre_check` runs once before the terminal is
/// touched; a `Some` return short-circuits the stage entirely (the
/// auto-reject path).
pub trait Model {
    /// The stage's terminal result.
    type Outcome;

    /// Outcome decided before any input, if any.
    fn pre_check(&self) -> Option<Self::Outcome> {
        None
    }

    /// Apply one key press.
    fn update(&mut self, key: KeyEvent) -> Option<Self::Outcome>;

    /// Render the current frame.
    fn view(&self, theme: &Theme) -> String;
}

/// Drive a model to completion on the attached terminal.
///
/// Puts the terminal into raw mode on the alternate screen, processes one
/// key per iteration, and restores the terminal before returning, on
/// errors too.
///
/// # Errors
///
/// Fails with [`PdfMixError::NotATerminal`] when stdout is not a tty, and
/// propagates terminal I/O errors.
pub fn run_model<M: Model>(mut model: M, theme: &Theme) -> Result<M::Outcome> {
    if let Some(outcome) = model.pre_check() {
        return Ok(outcome);
    }

    if !io::stdout().is_terminal() {
        return Err(PdfMixError::NotATerminal);
    }

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let outcome = drive(&mut model, theme, &mut stdout);

    execute!(stdout, Show, LeaveAlternateScreen).ok();
    disable_raw_mode().ok();

    outcome
}

fn drive<M: Model>(model: &mut M, theme: &Theme, stdout: &mut io::Stdout) -> Result<M::Outcome> {
    loop {
        render(&model.view(theme), stdout)?;

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if let Some(outcome) = model.update(key) {
                    return Ok(outcome);
                }
            }
            _ => {}
        }
    }
}

fn render(frame: &str, stdout: &mut io::Stdout) -> Result<()> {
    queue!(stdout, MoveTo(0, 0), Clear(ClearType::All))?;
    // Raw mode: explicit carriage returns, lines() would eat them.
    for line in frame.lines() {
        queue!(stdout, Print(line), Print("\r\n"))?;
    }
    stdout.flush()?;
    Ok(())
}

/// Escape and Ctrl+C both cancel, in every stage.
pub(crate) fn is_cancel_key(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
pub(crate) fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_cancel_key() {
        assert!(is_cancel_key(&press(KeyCode::Esc)));
        assert!(is_cancel_key(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_cancel_key(&press(KeyCode::Char('c'))));
        assert!(!is_cancel_key(&press(KeyCode::Enter)));
    }
}

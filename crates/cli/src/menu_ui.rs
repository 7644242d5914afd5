//! The inline single-keystroke menu widget.
//!
//! Draws a titled list of `key: prompt` rows with the default row
//! highlighted, then blocks for one committed choice. Pressing a key that
//! matches an entry commits it immediately; Up/Down move the highlight and
//! Enter commits it (the only way to reach an entry with a multi-character
//! key); Esc or Ctrl-C cancel.

use std::io::{stdout, Write};

use crossterm::cursor::{MoveTo, MoveToNextLine};
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::style::Color::{DarkBlue, Reset, Yellow};
use crossterm::style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::queue;

use rungs_core::error::Result;
use rungs_core::menus::PromptSet;

/// Outcome of one prompt round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The user committed an entry key.
    Key(String),
    /// The user aborted without choosing.
    Interrupted,
}

/// The single-keystroke selection widget the engine talks to.
pub trait MenuUi {
    /// Presents the prompts with `default_key` highlighted and blocks until
    /// the user commits a choice or cancels.
    ///
    /// # Errors
    ///
    /// Returns an error when the terminal cannot be read or drawn.
    fn prompt(&mut self, view: &PromptSet, default_key: &str, title: &str) -> Result<Selection>;
}

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
    }
}

/// Crossterm implementation of [`MenuUi`].
pub struct InlineMenu;

impl InlineMenu {
    fn redraw(view: &PromptSet, highlighted: usize, title: &str) -> Result<()> {
        let mut stdout = stdout();

        queue!(
            stdout,
            Clear(ClearType::All),
            MoveTo(0, 0),
            SetAttribute(Attribute::Bold),
            Print(format!("=== {title} ===")),
            SetAttribute(Attribute::Reset),
            MoveToNextLine(1),
        )?;

        for (row, key) in view.keys.iter().enumerate() {
            let prompt = view.prompt(key).unwrap_or_default();
            let line = format!("{key}: {prompt}");

            if row == highlighted {
                queue!(
                    stdout,
                    SetAttribute(Attribute::Bold),
                    SetBackgroundColor(DarkBlue),
                    SetForegroundColor(Yellow),
                    Print(line),
                    SetAttribute(Attribute::Reset),
                    SetBackgroundColor(Reset),
                    SetForegroundColor(Reset),
                )?;
            } else {
                queue!(stdout, Print(line))?;
            }

            queue!(stdout, MoveToNextLine(1))?;
        }

        stdout.flush()?;
        Ok(())
    }

    /// Leave the cursor below the menu so command output starts cleanly.
    fn finish(view: &PromptSet) -> Result<()> {
        let mut stdout = stdout();
        queue!(stdout, MoveTo(0, view.keys.len() as u16 + 1))?;
        stdout.flush()?;
        Ok(())
    }
}

impl MenuUi for InlineMenu {
    fn prompt(&mut self, view: &PromptSet, default_key: &str, title: &str) -> Result<Selection> {
        let mut highlighted = view
            .keys
            .iter()
            .position(|key| key == default_key)
            .unwrap_or(0);

        enable_raw_mode()?;
        let _raw_mode_guard = RawModeGuard; // When this goes out of scope, raw mode is disabled

        let selection = loop {
            Self::redraw(view, highlighted, title)?;

            let Event::Key(key_event) = event::read()? else {
                continue;
            };

            match key_event.code {
                KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                    break Selection::Interrupted;
                }
                KeyCode::Esc => break Selection::Interrupted,
                KeyCode::Enter => {
                    if let Some(key) = view.keys.get(highlighted) {
                        break Selection::Key(key.clone());
                    }
                }
                KeyCode::Up => highlighted = highlighted.saturating_sub(1),
                KeyCode::Down => {
                    highlighted = (highlighted + 1).min(view.keys.len().saturating_sub(1));
                }
                KeyCode::Char(c) => {
                    let typed = c.to_string();
                    if view.keys.contains(&typed) {
                        break Selection::Key(typed);
                    }
                }
                _ => {}
            }
        };

        Self::finish(view)?;
        Ok(selection)
    }
}

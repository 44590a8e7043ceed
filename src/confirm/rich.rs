//! Rich, key-driven yes/no prompt drawn on the terminal.

use super::state::{Choice, ConfirmState, KeyInput};
use super::{Decision, YesNoAsker};
use crate::error::ConfirmError;
use console::{measure_text_width, Key, Term};
use owo_colors::OwoColorize;
use std::io;
use tracing::debug;

const HELP_LINE: &str = "Use arrow keys or y/n to choose, Enter to confirm, q to quit";

/// Terminal operations the rich prompt draws and reads with.
pub trait Screen {
    fn is_term(&self) -> bool;
    fn colors_supported(&self) -> bool;
    /// Visible columns; rows of a wrapped line are counted against this.
    fn width(&self) -> usize;
    fn write_line(&self, line: &str) -> io::Result<()>;
    fn clear_last_lines(&self, rows: usize) -> io::Result<()>;
    fn read_key(&self) -> io::Result<Key>;
    fn hide_cursor(&self) -> io::Result<()>;
    fn show_cursor(&self) -> io::Result<()>;
}

impl Screen for Term {
    fn is_term(&self) -> bool {
        Term::is_term(self)
    }

    fn colors_supported(&self) -> bool {
        self.features().colors_supported()
    }

    fn width(&self) -> usize {
        usize::from(self.size().1)
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        Term::write_line(self, line)
    }

    fn clear_last_lines(&self, rows: usize) -> io::Result<()> {
        Term::clear_last_lines(self, rows)
    }

    fn read_key(&self) -> io::Result<Key> {
        Term::read_key(self)
    }

    fn hide_cursor(&self) -> io::Result<()> {
        Term::hide_cursor(self)
    }

    fn show_cursor(&self) -> io::Result<()> {
        Term::show_cursor(self)
    }
}

/// Full-screen-less interactive prompt: redraws its few lines in place and
/// erases them when done.
pub struct RichPrompt<S = Term> {
    screen: S,
}

impl<S: Screen> RichPrompt<S> {
    pub fn on(screen: S) -> Self {
        Self { screen }
    }

    fn run(&self, question: &str, drawn: &mut usize) -> io::Result<ConfirmState> {
        if !self.screen.is_term() {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "prompt stream is not a terminal",
            ));
        }
        let styled = self.screen.colors_supported();

        self.screen.hide_cursor()?;
        let mut state = ConfirmState::new();
        while let Some(choice) = state.highlighted() {
            self.redraw(&render_frame(question, choice, styled), drawn)?;

            let input = match self.screen.read_key() {
                Ok(key) => KeyInput::from_key(&key),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => KeyInput::Cancel,
                Err(e) => return Err(e),
            };
            state = state.on_input(input);
        }
        Ok(state)
    }

    /// `drawn` counts terminal rows, so wrapped lines are fully erased.
    fn redraw(&self, frame: &[String], drawn: &mut usize) -> io::Result<()> {
        self.erase(drawn)?;
        let width = self.screen.width();
        for line in frame {
            self.screen.write_line(line)?;
            *drawn += rows_for(line, width);
        }
        Ok(())
    }

    fn erase(&self, drawn: &mut usize) -> io::Result<()> {
        if *drawn > 0 {
            self.screen.clear_last_lines(*drawn)?;
            *drawn = 0;
        }
        Ok(())
    }
}

impl<S: Screen> YesNoAsker for RichPrompt<S> {
    fn ask(&mut self, question: &str) -> Result<Decision, ConfirmError> {
        let mut drawn = 0;
        let outcome = self.run(question, &mut drawn);

        // Leave nothing behind, whether we finished or failed mid-draw
        let cleanup = self
            .erase(&mut drawn)
            .and_then(|_| self.screen.show_cursor());

        let state = outcome.map_err(ConfirmError::Render)?;
        cleanup.map_err(ConfirmError::Render)?;

        debug!(?state, "Interactive prompt finished");
        Ok(state.decision().unwrap_or_else(Decision::abandoned))
    }
}

/// Terminal rows a line occupies once wrapped at `width` columns.
fn rows_for(line: &str, width: usize) -> usize {
    let columns = measure_text_width(line);
    if width == 0 || columns == 0 {
        1
    } else {
        columns.div_ceil(width)
    }
}

/// Lines drawn for one frame of the prompt.
pub fn render_frame(question: &str, highlighted: Choice, styled: bool) -> Vec<String> {
    let (yes, no) = match (styled, highlighted) {
        (false, Choice::Yes) => ("> Yes".to_string(), "No".to_string()),
        (false, Choice::No) => ("Yes".to_string(), "> No".to_string()),
        (true, Choice::Yes) => (
            "Yes".bold().green().to_string(),
            "No".bright_black().to_string(),
        ),
        (true, Choice::No) => (
            "Yes".bright_black().to_string(),
            "No".bold().green().to_string(),
        ),
    };

    let (question, help) = if styled {
        (
            question.bold().bright_blue().to_string(),
            HELP_LINE.dimmed().to_string(),
        )
    } else {
        (question.to_string(), HELP_LINE.to_string())
    };

    vec![
        question,
        String::new(),
        format!("[{}] / [{}]", yes, no),
        String::new(),
        help,
    ]
}

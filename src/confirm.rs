//! Confirmation Controller
//!
//! Obtains a yes/no decision from the user. Two askers implement the same
//! [`YesNoAsker`] seam: a rich key-driven prompt and a plain line prompt.
//! [`Confirmer`] picks between them and falls back to the line prompt when
//! the rich one cannot run.

use crate::error::ConfirmError;
use console::Term;
use std::io::IsTerminal;
use tracing::debug;

mod line;
mod rich;
mod state;

pub use line::{is_affirmative, LinePrompt};
pub use rich::{render_frame, RichPrompt, Screen};
pub use state::{Choice, ConfirmState, KeyInput};

/// Outcome of one yes/no interaction.
///
/// Only a finalized decision carries an answer; an abandoned one must be
/// treated as "no".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub accepted: bool,
    pub finalized: bool,
}

impl Decision {
    /// The user committed to an answer.
    pub fn answered(accepted: bool) -> Self {
        Self {
            accepted,
            finalized: true,
        }
    }

    /// The user cancelled without answering.
    pub fn abandoned() -> Self {
        Self {
            accepted: false,
            finalized: false,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.finalized && self.accepted
    }
}

/// Anything that can put a yes/no question to the user.
pub trait YesNoAsker {
    fn ask(&mut self, question: &str) -> Result<Decision, ConfirmError>;
}

/// Coordinates rich and line-based prompting.
pub struct Confirmer {
    rich: Option<Box<dyn YesNoAsker>>,
    fallback: Box<dyn YesNoAsker>,
}

impl Confirmer {
    pub fn new(rich: Option<Box<dyn YesNoAsker>>, fallback: Box<dyn YesNoAsker>) -> Self {
        Self { rich, fallback }
    }

    /// Rich mode when both stdin and stderr are terminals, line prompt otherwise.
    pub fn for_terminal() -> Self {
        let interactive = std::io::stdin().is_terminal() && Term::stderr().is_term();
        debug!(interactive, "Selecting confirmation mode");

        let rich: Option<Box<dyn YesNoAsker>> = if interactive {
            Some(Box::new(RichPrompt::on(Term::stderr())))
        } else {
            None
        };
        Self::new(rich, Box::new(LinePrompt::stdio()))
    }

    pub fn is_interactive(&self) -> bool {
        self.rich.is_some()
    }
}

impl YesNoAsker for Confirmer {
    fn ask(&mut self, question: &str) -> Result<Decision, ConfirmError> {
        debug_assert!(!question.is_empty(), "confirmation question must not be empty");

        if let Some(rich) = self.rich.as_mut() {
            match rich.ask(question) {
                Ok(decision) => return Ok(decision),
                Err(e) => {
                    debug!(error = %e, "Interactive prompt unavailable, using line prompt");
                    self.rich = None;
                }
            }
        }

        self.fallback.ask(question)
    }
}

//! Rich-mode selection state machine. Pure: no terminal access.

use super::Decision;
use console::Key;

/// One of the two options shown by the rich prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Yes,
    No,
}

impl Choice {
    pub fn toggled(self) -> Self {
        match self {
            Choice::Yes => Choice::No,
            Choice::No => Choice::Yes,
        }
    }

    pub fn as_bool(self) -> bool {
        matches!(self, Choice::Yes)
    }
}

/// Input events understood by the state machine, decoupled from key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Previous,
    Next,
    Yes,
    No,
    Confirm,
    Cancel,
    Ignored,
}

impl KeyInput {
    /// Map a terminal key press onto a state machine input.
    pub fn from_key(key: &Key) -> Self {
        match key {
            Key::ArrowLeft | Key::ArrowUp | Key::Char('h') | Key::Char('k') => KeyInput::Previous,
            Key::ArrowRight | Key::ArrowDown | Key::Tab | Key::Char('l') | Key::Char('j') => {
                KeyInput::Next
            }
            Key::Char('y') | Key::Char('Y') => KeyInput::Yes,
            Key::Char('n') | Key::Char('N') => KeyInput::No,
            Key::Enter => KeyInput::Confirm,
            // Ctrl-C arrives as ETX when the terminal is in raw mode
            Key::Escape | Key::Char('q') | Key::Char('\u{3}') => KeyInput::Cancel,
            _ => KeyInput::Ignored,
        }
    }
}

/// Selection state. `Finalized` and `Aborted` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmState {
    Highlighted(Choice),
    Finalized(bool),
    Aborted,
}

impl Default for ConfirmState {
    fn default() -> Self {
        ConfirmState::Highlighted(Choice::No)
    }
}

impl ConfirmState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one input. Terminal states absorb every input.
    pub fn on_input(self, input: KeyInput) -> Self {
        let current = match self {
            ConfirmState::Highlighted(choice) => choice,
            terminal => return terminal,
        };

        match input {
            // Two options: previous and next both land on the other one
            KeyInput::Previous | KeyInput::Next => ConfirmState::Highlighted(current.toggled()),
            KeyInput::Yes => ConfirmState::Finalized(true),
            KeyInput::No => ConfirmState::Finalized(false),
            KeyInput::Confirm => ConfirmState::Finalized(current.as_bool()),
            KeyInput::Cancel => ConfirmState::Aborted,
            KeyInput::Ignored => self,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, ConfirmState::Highlighted(_))
    }

    pub fn highlighted(&self) -> Option<Choice> {
        match self {
            ConfirmState::Highlighted(choice) => Some(*choice),
            _ => None,
        }
    }

    /// Outcome of a finished interaction; `None` while still selecting.
    pub fn decision(&self) -> Option<Decision> {
        match self {
            ConfirmState::Highlighted(_) => None,
            ConfirmState::Finalized(accepted) => Some(Decision::answered(*accepted)),
            ConfirmState::Aborted => Some(Decision::abandoned()),
        }
    }

    /// Feed inputs until a terminal state is reached; remaining inputs are
    /// not consumed.
    pub fn replay<I>(inputs: I) -> Self
    where
        I: IntoIterator<Item = KeyInput>,
    {
        let mut state = Self::new();
        for input in inputs {
            if state.is_terminal() {
                break;
            }
            state = state.on_input(input);
        }
        state
    }
}

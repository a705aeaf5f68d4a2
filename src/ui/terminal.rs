//! Console-backed user interface.

use std::fmt;
use std::io::{IsTerminal, Read};

use console::Term;

use super::UserInterface;

/// Interactive terminal UI.
///
/// The keypress wait is skipped when standard input is not a terminal, so
/// piped runs never block. Standard output may still be redirected while a
/// user sits at the keyboard.
pub struct TerminalUI {
    stdin_is_terminal: Box<dyn Fn() -> bool>,
}

impl TerminalUI {
    /// Create a UI that reads keys from the process's terminal.
    pub fn new() -> Self {
        Self::with_stdin_check(|| std::io::stdin().is_terminal())
    }

    /// Create a UI with a custom check for whether stdin is a terminal.
    pub fn with_stdin_check(check: impl Fn() -> bool + 'static) -> Self {
        Self {
            stdin_is_terminal: Box::new(check),
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TerminalUI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalUI").finish_non_exhaustive()
    }
}

impl UserInterface for TerminalUI {
    fn wait_for_key(&mut self) {
        if !(self.stdin_is_terminal)() {
            tracing::debug!("Stdin is not a terminal; skipping keypress wait");
            return;
        }

        // console reads keys through whichever stream is attached to the tty.
        let term = [Term::stdout(), Term::stderr()]
            .into_iter()
            .find(Term::is_term);

        let result = match term {
            Some(term) => term.read_key().map(|_| ()),
            None => std::io::stdin().read(&mut [0u8; 1]).map(|_| ()),
        };

        if let Err(e) = result {
            tracing::debug!("Keypress wait failed: {}", e);
        }
    }
}

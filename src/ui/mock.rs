//! Mock UI implementation for testing.

use super::UserInterface;

/// Mock UI that records interactions instead of blocking.
#[derive(Debug, Default)]
pub struct MockUI {
    key_waits: usize,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times a keypress was waited for.
    pub fn key_waits(&self) -> usize {
        self.key_waits
    }
}

impl UserInterface for MockUI {
    fn wait_for_key(&mut self) {
        self.key_waits += 1;
    }
}

//! Terminal interaction.
//!
//! The report itself is plain text on standard output; the only interactive
//! behavior is the pause before exit. It sits behind [`UserInterface`] so it
//! can be mocked in tests.
//!
//! # Example
//!
//! ```
//! use dotnet_versions::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.wait_for_key();
//! assert_eq!(ui.key_waits(), 1);
//! ```

pub mod mock;
pub mod terminal;

pub use mock::MockUI;
pub use terminal::TerminalUI;

/// Trait for user interface interactions.
pub trait UserInterface {
    /// Block until the user presses a key.
    ///
    /// Returns immediately when there is no terminal to read from.
    fn wait_for_key(&mut self);
}

//! Command-line interface.
//!
//! - [`args`] - raw argument collection and switch classification
//! - [`dispatcher`] - routes an invocation to usage output or detection

pub mod args;
pub mod dispatcher;

pub use args::{has_switch, Cli, Invocation, USAGE};
pub use dispatcher::CommandDispatcher;

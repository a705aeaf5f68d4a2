//! Shell sessions for the external `dotnet` queries.

pub mod platform;
pub mod session;

pub use platform::{shell_program, stdin_args};
pub use session::{run_queries, ShellSession};

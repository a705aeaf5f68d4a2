//! Scoped shell sessions.
//!
//! A [`ShellSession`] owns one shell process whose standard input and output
//! are piped. Commands are written to its input one per line; closing the
//! input lets the shell run them and exit, after which all of its standard
//! output is returned as one block.
//!
//! The process is released on every exit path: if a session is dropped
//! before [`ShellSession::finish`] reaps it, the child is killed and waited
//! for.

use std::io::Write;
use std::path::Path;
use std::process::{Child, Command, Stdio};

use super::platform::stdin_args;
use crate::error::{DetectError, Result};

/// A running shell fed from a pipe.
#[derive(Debug)]
pub struct ShellSession {
    program: String,
    child: Option<Child>,
}

impl ShellSession {
    /// Launch `program` with piped standard input and output.
    ///
    /// Standard error is inherited, so diagnostics from the shell reach the
    /// terminal unchanged.
    pub fn spawn(program: &Path) -> Result<Self> {
        let program_name = program.display().to_string();
        let child = Command::new(program)
            .args(stdin_args(program))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| DetectError::ShellLaunch {
                program: program_name.clone(),
                source,
            })?;

        tracing::debug!("Started shell '{}' (pid {})", program_name, child.id());

        Ok(Self {
            program: program_name,
            child: Some(child),
        })
    }

    /// Write each command, in order, on its own line.
    pub fn feed<I, S>(&mut self, commands: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stdin = self
            .child
            .as_mut()
            .and_then(|child| child.stdin.as_mut())
            .ok_or_else(|| DetectError::ShellIo {
                source: std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "shell input already closed",
                ),
            })?;

        for command in commands {
            writeln!(stdin, "{}", command.as_ref())
                .map_err(|source| DetectError::ShellIo { source })?;
        }
        stdin.flush().map_err(|source| DetectError::ShellIo { source })
    }

    /// Close the shell's input, wait for it to exit and collect its output.
    pub fn finish(mut self) -> Result<String> {
        let Some(child) = self.child.take() else {
            return Ok(String::new());
        };

        // wait_with_output closes stdin before waiting.
        let output = child
            .wait_with_output()
            .map_err(|source| DetectError::ShellIo { source })?;

        tracing::debug!("Shell '{}' exited with {}", self.program, output.status);

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Drop for ShellSession {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

/// Run `commands` in one session of `program` and return the combined output.
pub fn run_queries<S: AsRef<str>>(program: &Path, commands: &[S]) -> Result<String> {
    let mut session = ShellSession::spawn(program)?;
    session.feed(commands.iter().map(|c| c.as_ref()))?;
    session.finish()
}

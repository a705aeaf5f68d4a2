//! Platform-specific shell selection.

use std::path::{Path, PathBuf};

/// Arguments that make `program` read commands from standard input.
///
/// PowerShell needs `-Command -`; cmd and POSIX shells read stdin as-is.
pub fn stdin_args(program: &Path) -> &'static [&'static str] {
    let name = program
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    match name.as_str() {
        "powershell" | "pwsh" => &["-NoLogo", "-NoProfile", "-Command", "-"],
        _ => &[],
    }
}

/// Resolve the shell program for a session.
///
/// An explicit override wins; otherwise `%COMSPEC%` on Windows and `$SHELL`
/// elsewhere, falling back to `cmd.exe` and `/bin/sh`.
pub fn shell_program(override_program: Option<&str>) -> PathBuf {
    match override_program {
        Some(program) => PathBuf::from(program),
        None => get_shell_executable(),
    }
}

fn get_shell_executable() -> PathBuf {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("cmd.exe"))
    } else {
        std::env::var("SHELL")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/bin/sh"))
    }
}

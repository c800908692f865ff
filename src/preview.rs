//! Browser preview.
//!
//! Hands a written page to the platform's default handler. The child
//! process is spawned detached and never waited on; a launch failure is the
//! caller's warning, not a conversion error.

use std::io;
use std::path::Path;
use std::process::Command;

/// Open `path` with the platform opener.
pub fn open(path: &Path) -> io::Result<()> {
    opener_command(path).spawn().map(|_| ())
}

#[cfg(target_os = "macos")]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}

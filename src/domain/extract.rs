use std::path::Path;
use std::process::Command;

use log::debug;

use crate::error::{GittallyError, Result};

/// Sentinel separating commit records in the raw log text. The pretty
/// format appends one more `@`, so every record opens with `@<name> …`.
pub const COMMIT_SENTINEL: &str = "@@@COMMIT@@";

const PRETTY_FORMAT: &str = "--pretty=format:@@@COMMIT@@@<%an> <%ae> <%at>@";

/// Run `git log` for the given working directory and hand back its stdout
/// in one piece. Merge commits are excluded here so the parser never sees
/// them; git's own diagnostics are passed through to stderr.
pub fn numstat_log(dir: &Path) -> Result<String> {
    debug!("running git log in {}", dir.display());
    let output = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(["log", "--numstat", "--no-merges", PRETTY_FORMAT])
        .output()?;

    if !output.stderr.is_empty() {
        eprint!("{}", String::from_utf8_lossy(&output.stderr));
    }
    if !output.status.success() {
        return Err(GittallyError::Extraction(output.status));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

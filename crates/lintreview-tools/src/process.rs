//! Running external tool processes.

use crate::ToolError;
use std::process::Command;
use tracing::debug;

/// How [`run_command`] treats the finished process.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Accept a non-zero exit status instead of failing.
    ///
    /// Linters exit non-zero when they report problems.
    pub ignore_error: bool,
    /// Append stderr lines after stdout lines.
    pub include_errors: bool,
}

/// Run `command` to completion and return its output as lines.
///
/// Output is decoded lossily as UTF-8. Blank lines are dropped, so a process
/// that prints nothing yields an empty vector.
pub fn run_command(command: &mut Command, options: RunOptions) -> Result<Vec<String>, ToolError> {
    debug!(?command, "running command");
    let output = command.output()?;

    if !output.status.success() {
        if !options.ignore_error {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ToolError::ExecutionFailed(format!(
                "{}: {}",
                output.status,
                stderr.trim()
            )));
        }
        debug!(status = %output.status, "ignoring non-zero exit status");
    }

    let mut lines = collect_lines(&output.stdout);
    if options.include_errors {
        lines.extend(collect_lines(&output.stderr));
    }
    Ok(lines)
}

fn collect_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

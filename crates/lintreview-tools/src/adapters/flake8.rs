//! Flake8 adapter - Python style and error checker.
//!
//! Flake8 wraps pycodestyle, pyflakes and mccabe and reports one problem per
//! line as `path:line:column: CODE message`.
//! https://flake8.pycqa.org/

use crate::{
    Flake8Options, Problem, Problems, RunOptions, Tool, ToolError, ToolInfo, relative_to,
    run_command,
};
use std::path::PathBuf;
use std::process::Command;
use thiserror::Error;
use tracing::{debug, debug_span, warn};

/// Flake8 Python linter adapter.
pub struct Flake8 {
    info: ToolInfo,
    options: Flake8Options,
    base_path: PathBuf,
    executable: PathBuf,
}

impl Flake8 {
    pub fn new(options: Flake8Options, base_path: impl Into<PathBuf>) -> Self {
        Self {
            info: ToolInfo {
                name: "flake8",
                extensions: &["py"],
                website: "https://flake8.pycqa.org/",
            },
            options,
            base_path: base_path.into(),
            executable: PathBuf::from("flake8"),
        }
    }

    /// Use a specific flake8 executable instead of the one on `PATH`.
    pub fn with_executable(mut self, executable: impl Into<PathBuf>) -> Self {
        self.executable = executable.into();
        self
    }

    /// Build the single flake8 invocation covering all `files`.
    ///
    /// File arguments are made relative to the base path, which is also the
    /// working directory, so `--per-file-ignores` patterns resolve as written.
    pub fn build_command(&self, files: &[PathBuf]) -> Command {
        let mut command = Command::new(&self.executable);
        for (option, value) in self.options.flags() {
            command.arg(format!("--{option}")).arg(value);
        }
        command.args(files.iter().map(|f| relative_to(f, &self.base_path)));
        command.current_dir(&self.base_path);
        command
    }
}

/// A successfully parsed flake8 output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub filename: String,
    pub line: usize,
    pub message: String,
}

impl From<ParsedLine> for Problem {
    fn from(parsed: ParsedLine) -> Self {
        Problem::new(parsed.filename, parsed.line, parsed.message)
    }
}

/// Why a flake8 output line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLineError {
    #[error("expected at least 3 ':'-separated fields")]
    TooFewParts,
    #[error("invalid line number {0:?}")]
    InvalidLineNumber(String),
}

/// Parse one line of flake8 output.
///
/// Accepts `path:line: message` and `path:line:column: message`. The column
/// is dropped. Anything after the fourth field separator belongs to the
/// message.
pub fn parse_line(line: &str) -> Result<ParsedLine, ParseLineError> {
    let parts: Vec<&str> = line.splitn(4, ':').collect();
    let message = match parts.as_slice() {
        [_, _, message] | [_, _, _, message] => message.trim(),
        _ => return Err(ParseLineError::TooFewParts),
    };
    let line_number = parts[1]
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| ParseLineError::InvalidLineNumber(parts[1].to_string()))?;

    Ok(ParsedLine {
        filename: parts[0].to_string(),
        line: line_number,
        message: message.to_string(),
    })
}

impl Tool for Flake8 {
    fn info(&self) -> &ToolInfo {
        &self.info
    }

    fn check_dependencies(&self) -> bool {
        which::which(&self.executable).is_ok()
    }

    fn version(&self) -> Option<String> {
        Command::new(&self.executable)
            .arg("--version")
            .output()
            .ok()
            .filter(|o| o.status.success())
            .and_then(|o| String::from_utf8(o.stdout).ok())
            .and_then(|s| s.lines().next().map(|l| l.trim().to_string()))
    }

    fn process_files(&self, files: &[PathBuf], problems: &mut Problems) -> Result<(), ToolError> {
        let span = debug_span!("tool", name = "flake8", base = %self.base_path.display());
        let _guard = span.enter();
        debug!(count = files.len(), ?files, "processing files with flake8");

        let mut command = self.build_command(files);
        // flake8 exits 1 whenever it reports anything
        let output = run_command(
            &mut command,
            RunOptions {
                ignore_error: true,
                include_errors: true,
            },
        )?;

        if output.is_empty() {
            debug!("No flake8 errors found.");
            return Ok(());
        }

        for line in &output {
            match parse_line(line) {
                Ok(parsed) => problems.add(parsed.into()),
                Err(e) => warn!(%line, error = %e, "Unable to process flake8 output"),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use std::path::Path;

    fn args(command: &Command) -> Vec<&OsStr> {
        command.get_args().collect()
    }

    #[test]
    fn test_match_file() {
        let flake8 = Flake8::new(Flake8Options::default(), "/base");
        assert!(flake8.match_file(Path::new("a/b/c.py")));
        assert!(!flake8.match_file(Path::new("a/b/c.PY")));
        assert!(!flake8.match_file(Path::new("a/b/c.pyc")));
        assert!(!flake8.match_file(Path::new("a/b/c.pyi")));
    }

    #[test]
    fn test_build_command_skips_empty_options() {
        let options = Flake8Options::from_pairs([("select", "E1"), ("ignore", "")]).unwrap();
        let flake8 = Flake8::new(options, "/base");
        let command = flake8.build_command(&[PathBuf::from("/base/x.py")]);

        assert_eq!(command.get_program(), OsStr::new("flake8"));
        assert_eq!(args(&command), vec!["--select", "E1", "x.py"]);
        assert_eq!(command.get_current_dir(), Some(Path::new("/base")));
    }

    #[test]
    fn test_build_command_batches_files() {
        let options = Flake8Options::from_pairs([
            ("max-line-length", "120"),
            ("per-file-ignores", "tests/*:E501"),
        ])
        .unwrap();
        let flake8 = Flake8::new(options, "/repo");
        let command = flake8.build_command(&[
            PathBuf::from("/repo/pkg/a.py"),
            PathBuf::from("/repo/tests/test_a.py"),
        ]);

        assert_eq!(
            args(&command),
            vec![
                "--max-line-length",
                "120",
                "--per-file-ignores",
                "tests/*:E501",
                "pkg/a.py",
                "tests/test_a.py",
            ]
        );
    }

    #[test]
    fn test_parse_line_with_column() {
        assert_eq!(
            parse_line("foo.py:10:5: E501 line too long"),
            Ok(ParsedLine {
                filename: "foo.py".to_string(),
                line: 10,
                message: "E501 line too long".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_line_without_column() {
        assert_eq!(
            parse_line("foo.py:10: syntax error"),
            Ok(ParsedLine {
                filename: "foo.py".to_string(),
                line: 10,
                message: "syntax error".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_line_message_keeps_extra_colons() {
        let parsed = parse_line("pkg/mod.py:3:1: E999 SyntaxError: invalid syntax").unwrap();
        assert_eq!(parsed.message, "E999 SyntaxError: invalid syntax");
        assert_eq!(parsed.line, 3);
    }

    #[test]
    fn test_parse_line_too_few_parts() {
        assert_eq!(
            parse_line("not a valid line"),
            Err(ParseLineError::TooFewParts)
        );
        assert_eq!(parse_line("foo.py:10"), Err(ParseLineError::TooFewParts));
    }

    #[test]
    fn test_parse_line_rejects_non_positive_line_number() {
        assert_eq!(
            parse_line("foo.py:0: E1 msg"),
            Err(ParseLineError::InvalidLineNumber("0".to_string()))
        );
        assert_eq!(
            parse_line("foo.py:-3: E1 msg"),
            Err(ParseLineError::InvalidLineNumber("-3".to_string()))
        );
    }

    #[test]
    fn test_parse_line_invalid_line_number() {
        assert_eq!(
            parse_line("foo.py:notanumber: E1"),
            Err(ParseLineError::InvalidLineNumber("notanumber".to_string()))
        );
    }
}

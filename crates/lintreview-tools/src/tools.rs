//! Tool trait and common types.

use crate::Problems;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Information about a tool.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Tool name (e.g., "flake8").
    pub name: &'static str,
    /// File extensions this tool handles, without the leading dot.
    pub extensions: &'static [&'static str],
    /// URL to tool website.
    pub website: &'static str,
}

/// Error type for tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("tool execution failed: {0}")]
    ExecutionFailed(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for tool adapters.
///
/// The caller checks [`Tool::check_dependencies`] first and skips tools whose
/// binary is missing, then hands every changed file to [`Tool::execute`].
pub trait Tool: Send + Sync {
    /// Get tool information.
    fn info(&self) -> &ToolInfo;

    /// Check if the external binary can be found on the search path.
    fn check_dependencies(&self) -> bool;

    /// Get the tool version, if available.
    fn version(&self) -> Option<String>;

    /// Whether this tool should process the given file.
    fn match_file(&self, path: &Path) -> bool {
        has_extension(path, self.info().extensions)
    }

    /// Run the tool on files already known to match, recording problems.
    fn process_files(&self, files: &[PathBuf], problems: &mut Problems) -> Result<(), ToolError>;

    /// Filter `files` with [`Tool::match_file`] and process the rest.
    ///
    /// Does nothing when no file matches.
    fn execute(&self, files: &[PathBuf], problems: &mut Problems) -> Result<(), ToolError> {
        let matching: Vec<PathBuf> = files
            .iter()
            .filter(|f| self.match_file(f))
            .cloned()
            .collect();
        if matching.is_empty() {
            return Ok(());
        }
        self.process_files(&matching, problems)
    }
}

/// Check whether a path's extension is one of `extensions` (case-sensitive).
pub fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Problem;
    use std::sync::Mutex;

    struct Recorder {
        info: ToolInfo,
        seen: Mutex<Vec<PathBuf>>,
    }

    impl Tool for Recorder {
        fn info(&self) -> &ToolInfo {
            &self.info
        }

        fn check_dependencies(&self) -> bool {
            true
        }

        fn version(&self) -> Option<String> {
            None
        }

        fn process_files(
            &self,
            files: &[PathBuf],
            problems: &mut Problems,
        ) -> Result<(), ToolError> {
            self.seen.lock().unwrap().extend(files.iter().cloned());
            for file in files {
                problems.add(Problem::new(file.display().to_string(), 1, "seen"));
            }
            Ok(())
        }
    }

    fn recorder() -> Recorder {
        Recorder {
            info: ToolInfo {
                name: "recorder",
                extensions: &["py"],
                website: "",
            },
            seen: Mutex::new(Vec::new()),
        }
    }

    #[test]
    fn test_has_extension() {
        assert!(has_extension(Path::new("a/b/c.py"), &["py"]));
        assert!(!has_extension(Path::new("a/b/c.PY"), &["py"]));
        assert!(!has_extension(Path::new("a/b/c.pyc"), &["py"]));
        assert!(!has_extension(Path::new("a/b/.py"), &["py"]));
        assert!(!has_extension(Path::new("Makefile"), &["py"]));
    }

    #[test]
    fn test_execute_filters_files() {
        let tool = recorder();
        let mut problems = Problems::new();
        let files = vec![
            PathBuf::from("a.py"),
            PathBuf::from("b.js"),
            PathBuf::from("c.py"),
        ];
        tool.execute(&files, &mut problems).unwrap();

        let seen = tool.seen.lock().unwrap();
        assert_eq!(*seen, vec![PathBuf::from("a.py"), PathBuf::from("c.py")]);
        assert_eq!(problems.len(), 2);
    }

    #[test]
    fn test_execute_without_matches_does_nothing() {
        let tool = recorder();
        let mut problems = Problems::new();
        let files = vec![PathBuf::from("README.md"), PathBuf::from("lib.rs")];
        tool.execute(&files, &mut problems).unwrap();

        assert!(tool.seen.lock().unwrap().is_empty());
        assert!(problems.is_empty());
    }
}

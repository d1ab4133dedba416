//! Adapters that run external linters and collect their problems.
//!
//! Each adapter wraps one external static-analysis binary behind the
//! [`Tool`] trait: it reports whether the binary is installed, picks the
//! files it understands, runs the binary once per batch and parses the
//! textual output into [`Problem`] records appended to a caller-owned
//! [`Problems`] sink.
//!
//! # Configuration
//!
//! Tool options live in `.lintreview/tools.toml`:
//!
//! ```toml
//! [tools.flake8]
//! select = "E1,W"
//! max-line-length = 100
//! per-file-ignores = "tests/*:E501"
//! ```
//!
//! # Example
//!
//! ```ignore
//! use lintreview_tools::{Flake8, Problems, Tool, ToolsConfig};
//!
//! let config = ToolsConfig::load(root)?;
//! let flake8 = Flake8::new(config.tools.flake8, root);
//! if flake8.check_dependencies() {
//!     let mut problems = Problems::new();
//!     flake8.execute(&files, &mut problems)?;
//! }
//! ```

pub mod adapters;
mod config;
mod paths;
mod problems;
mod process;
mod tools;

pub use adapters::Flake8;
pub use config::{ConfigError, Flake8Options, OptionValue, ToolSections, ToolsConfig};
pub use paths::relative_to;
pub use problems::{Problem, Problems};
pub use process::{RunOptions, run_command};
pub use tools::{Tool, ToolError, ToolInfo, has_extension};

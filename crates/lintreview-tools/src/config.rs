//! Tool configuration.
//!
//! Options are read from `.lintreview/tools.toml`:
//!
//! ```toml
//! [tools.flake8]
//! select = "E1,W"
//! ignore = "W503"
//! max-line-length = 100
//! ```
//!
//! Every flake8 option is optional. Empty strings and `0` count as unset and
//! never reach the command line.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Error type for loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown flake8 option: {0}")]
    UnknownOption(String),
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Root of `.lintreview/tools.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub tools: ToolSections,
}

/// Per-tool option tables.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolSections {
    pub flake8: Flake8Options,
}

impl ToolsConfig {
    /// Load `<root>/.lintreview/tools.toml`, or defaults if it does not exist.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let config_path = root.join(".lintreview").join("tools.toml");
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::from_path(&config_path)
    }

    /// Load an explicit config file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

/// A single option value: text, or an integer for numeric options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Integer(i64),
    Text(String),
}

impl OptionValue {
    /// The command-line argument for this value, or `None` if it is unset-equivalent.
    pub fn as_arg(&self) -> Option<String> {
        match self {
            Self::Integer(0) => None,
            Self::Integer(n) => Some(n.to_string()),
            Self::Text(s) if s.is_empty() => None,
            Self::Text(s) => Some(s.clone()),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

/// Options passed through to flake8 as `--<name> <value>`.
///
/// See <https://flake8.pycqa.org/en/latest/user/options.html>.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Flake8Options {
    pub exclude: Option<OptionValue>,
    pub filename: Option<OptionValue>,
    pub select: Option<OptionValue>,
    pub ignore: Option<OptionValue>,
    pub max_line_length: Option<OptionValue>,
    pub format: Option<OptionValue>,
    pub max_complexity: Option<OptionValue>,
    pub snippet: Option<OptionValue>,
    pub per_file_ignores: Option<OptionValue>,
}

impl Flake8Options {
    /// Option names in the order they are emitted on the command line.
    pub const NAMES: [&'static str; 9] = [
        "exclude",
        "filename",
        "select",
        "ignore",
        "max-line-length",
        "format",
        "max-complexity",
        "snippet",
        "per-file-ignores",
    ];

    /// Build options from a name/value mapping, rejecting unknown names.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<OptionValue>,
    {
        let mut options = Self::default();
        for (name, value) in pairs {
            let slot = options
                .slot_mut(name.as_ref())
                .ok_or_else(|| ConfigError::UnknownOption(name.as_ref().to_string()))?;
            *slot = Some(value.into());
        }
        Ok(options)
    }

    /// Look up an option by its flake8 name.
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        match name {
            "exclude" => self.exclude.as_ref(),
            "filename" => self.filename.as_ref(),
            "select" => self.select.as_ref(),
            "ignore" => self.ignore.as_ref(),
            "max-line-length" => self.max_line_length.as_ref(),
            "format" => self.format.as_ref(),
            "max-complexity" => self.max_complexity.as_ref(),
            "snippet" => self.snippet.as_ref(),
            "per-file-ignores" => self.per_file_ignores.as_ref(),
            _ => None,
        }
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut Option<OptionValue>> {
        Some(match name {
            "exclude" => &mut self.exclude,
            "filename" => &mut self.filename,
            "select" => &mut self.select,
            "ignore" => &mut self.ignore,
            "max-line-length" => &mut self.max_line_length,
            "format" => &mut self.format,
            "max-complexity" => &mut self.max_complexity,
            "snippet" => &mut self.snippet,
            "per-file-ignores" => &mut self.per_file_ignores,
            _ => return None,
        })
    }

    /// Set options as `(name, value)` pairs, skipping unset-equivalent values.
    pub fn flags(&self) -> Vec<(&'static str, String)> {
        Self::NAMES
            .iter()
            .filter_map(|&name| {
                let value = self.get(name)?.as_arg()?;
                Some((name, value))
            })
            .collect()
    }
}

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

/// File name searched for when discovering a configuration.
pub const CONFIG_FILE_NAME: &str = "Golex.toml";

/// How the host prints the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One token per line.
    #[default]
    Text,
    /// A JSON array of `{ kind, literal }` objects.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// The parsed Golex.toml configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GolexConfig {
    pub output: OutputSection,
    pub check: CheckSection,
    pub log: LogSection,
    /// The directory containing the Golex.toml file, if one was loaded.
    pub root_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSection {
    pub format: OutputFormat,
    /// Include the trailing end-of-input token in the output.
    pub show_eof: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_eof: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSection {
    /// Exit with a failure status when the stream contains illegal tokens.
    pub deny_illegal: bool,
}

impl Default for CheckSection {
    fn default() -> Self {
        Self { deny_illegal: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSection {
    /// A `tracing` filter directive such as `warn` or `golex_lexer=trace`.
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

/// Raw TOML structure for deserialization.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    output: RawOutput,
    #[serde(default)]
    check: RawCheck,
    #[serde(default)]
    log: RawLog,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOutput {
    #[serde(default)]
    format: Option<String>,
    #[serde(default = "default_true")]
    show_eof: bool,
}

impl Default for RawOutput {
    fn default() -> Self {
        Self {
            format: None,
            show_eof: true,
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCheck {
    #[serde(default = "default_true")]
    deny_illegal: bool,
}

impl Default for RawCheck {
    fn default() -> Self {
        Self { deny_illegal: true }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLog {
    #[serde(default = "default_level")]
    level: String,
}

impl Default for RawLog {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// Errors that can occur when loading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no Golex.toml found (searched from {0})")]
    NotFound(String),
    #[error("failed to read Golex.toml: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("invalid Golex.toml: {0}")]
    ParseError(String),
    #[error("unknown output format '{0}' (expected 'text' or 'json')")]
    UnknownFormat(String),
    #[error("invalid Golex.toml: [log] level must not be empty")]
    EmptyLogLevel,
}

/// Walk up from `start_dir` looking for `Golex.toml`.
/// Returns the path to the configuration file if found.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load and validate a configuration from a file path.
pub fn load_config(path: &Path) -> Result<GolexConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let root_dir = path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();
    parse_config(&content, Some(root_dir))
}

/// Parse and validate a configuration from a string.
pub fn parse_config(content: &str, root_dir: Option<PathBuf>) -> Result<GolexConfig, ConfigError> {
    let raw: RawConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    let format = match raw.output.format {
        Some(ref name) => name.parse()?,
        None => OutputFormat::default(),
    };

    if raw.log.level.trim().is_empty() {
        return Err(ConfigError::EmptyLogLevel);
    }

    Ok(GolexConfig {
        output: OutputSection {
            format,
            show_eof: raw.output.show_eof,
        },
        check: CheckSection {
            deny_illegal: raw.check.deny_illegal,
        },
        log: LogSection {
            level: raw.log.level,
        },
        root_dir,
    })
}

/// Find and load the configuration starting from `start_dir`.
pub fn find_and_load_config(start_dir: &Path) -> Result<GolexConfig, ConfigError> {
    let config_path = find_config(start_dir)
        .ok_or_else(|| ConfigError::NotFound(start_dir.display().to_string()))?;
    load_config(&config_path)
}

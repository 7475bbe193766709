//! Driver configuration.
//!
//! Layers, lowest precedence first: built-in defaults, a TOML or JSON file,
//! `HOPGRAPH_*` environment variables, then command-line flags (applied by
//! the binary).

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::{Result, ResultExt};

/// Environment variable overriding [`HopgraphConfig::log_level`].
pub const ENV_LOG: &str = "HOPGRAPH_LOG";
/// Environment variable overriding [`HopgraphConfig::output`].
pub const ENV_OUTPUT: &str = "HOPGRAPH_OUTPUT";
/// Environment variable overriding [`HopgraphConfig::auto_declare`].
pub const ENV_AUTO_DECLARE: &str = "HOPGRAPH_AUTO_DECLARE";

/// How command reports are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::invalid_config(format!(
                "unknown output format '{other}' (expected text or json)"
            ))),
        }
    }
}

/// Driver settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HopgraphConfig {
    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Report format.
    #[serde(default)]
    pub output: OutputFormat,

    /// Create vertices for neighbours that never get a line of their own.
    #[serde(default)]
    pub auto_declare: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for HopgraphConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output: OutputFormat::default(),
            auto_declare: false,
        }
    }
}

impl HopgraphConfig {
    /// Read a configuration file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    ///
    /// # Errors
    ///
    /// Returns `FileReadFailed` if the file cannot be read, or a parse error
    /// if its contents do not describe a configuration.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::file_read_failed(path, e.to_string()))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            serde_json::from_str(&contents).map_err(|e| Error::json_parse_failed(e.to_string()))
        } else {
            toml::from_str(&contents).map_err(|e| Error::toml_parse_failed(e.to_string()))
        }
    }

    /// Overlay values found through `lookup`, keyed by `HOPGRAPH_*` variable
    /// name. Unparseable values are logged and skipped.
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG).filter(|level| !level.trim().is_empty()) {
            self.log_level = level;
        }

        if let Some(output) = lookup(ENV_OUTPUT)
            .and_then(|raw| raw.parse::<OutputFormat>().into_option_logged())
        {
            self.output = output;
        }

        if let Some(auto_declare) =
            lookup(ENV_AUTO_DECLARE).and_then(|raw| parse_flag(&raw).into_option_logged())
        {
            self.auto_declare = auto_declare;
        }

        self
    }

    /// Load the file at `path` (or defaults when none is given), then apply
    /// the environment.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`HopgraphConfig::from_file`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(|key| std::env::var(key).ok()))
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::invalid_config(format!(
            "{ENV_AUTO_DECLARE} must be a boolean, got '{other}'"
        ))),
    }
}

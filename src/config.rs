//! Report configuration (vosi.toml)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Name of the configuration file looked up by [`Config::discover`]
pub const CONFIG_FILE: &str = "vosi.toml";

/// Warnings of one code shown before the rest are suppressed
pub const DEFAULT_MAX_WARNINGS: usize = 10;

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Reporting policy
    #[serde(default)]
    pub report: ReportConfig,
}

/// What to do with emitted conditions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Verification policy
    #[serde(default)]
    pub verify: Verify,

    /// Per-code cap on recorded warnings
    #[serde(default = "default_max_warnings")]
    pub max_warnings: usize,

    /// Source identifier used when a position carries none
    #[serde(default)]
    pub source: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            verify: Verify::default(),
            max_warnings: DEFAULT_MAX_WARNINGS,
            source: None,
        }
    }
}

impl ReportConfig {
    pub fn with_verify(mut self, verify: Verify) -> Self {
        self.verify = verify;
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

fn default_max_warnings() -> usize {
    DEFAULT_MAX_WARNINGS
}

/// Verification policy for warnings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verify {
    /// Drop warnings silently
    #[default]
    Ignore,
    /// Record warnings and keep going
    Warn,
    /// Escalate warnings raised through `warn_or_raise` to fatal errors
    Exception,
}

impl std::str::FromStr for Verify {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ignore" => Ok(Verify::Ignore),
            "warn" => Ok(Verify::Warn),
            "exception" => Ok(Verify::Exception),
            other => Err(ConfigError::Parse(format!(
                "unknown verify policy '{}' (expected ignore, warn or exception)",
                other
            ))),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize the configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Find `vosi.toml` in `start` or one of its ancestors
    pub fn discover(start: &Path) -> Option<PathBuf> {
        let mut dir = start;
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                return Some(candidate);
            }
            dir = dir.parent()?;
        }
    }

    /// Load an explicit file, else a discovered one, else defaults
    pub fn resolve(explicit: Option<&Path>, start: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => match Self::discover(start) {
                Some(path) => {
                    tracing::debug!(path = %path.display(), "using discovered configuration");
                    Self::load(&path)
                }
                None => Ok(Self::default()),
            },
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

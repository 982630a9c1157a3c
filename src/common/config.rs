//! Configuration file handling

use serde::Deserialize;

use super::paths::config_path;
use super::Result;
use crate::transport::FrameKind;

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Initial session settings
    #[serde(default)]
    pub session: SessionConfig,

    /// Log file settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Initial session settings, overridable from the command line
#[derive(Debug, Deserialize, Default)]
pub struct SessionConfig {
    /// Show endpoint and write mode in the prompt
    #[serde(default)]
    pub verbose: bool,

    /// Outgoing message kind before any `mode` command
    #[serde(default)]
    pub mode: FrameKind,
}

/// Log file settings
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Also write logs to `<data dir>/logs/wsclient.log`
    #[serde(default)]
    pub file: bool,

    /// Filter directives for the log file
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: false,
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "wsclient=debug,info".to_string()
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = config_path() {
            if path.exists() {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| super::Error::file_read(&path, &e))?;
                return Self::parse(&content);
            }
        }
        Ok(Self::default())
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| super::Error::ConfigParse(e.to_string()))
    }
}

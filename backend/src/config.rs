//! Dashboard configuration.
//!
//! Settings come from an optional TOML file and are then overridden by
//! environment variables:
//!
//! ```toml
//! [source]
//! data_path = "Project_Quantum_Leap.csv"
//! owners = ["dan@rocketramp.ai", "adam@rocketramp.ai"]
//!
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [chart]
//! height = 800
//! highlight_color = "gold"
//! highlight_width = 4
//! top_performers = 2
//! ```
//!
//! # Environment Variables
//!
//! - `PIPELINE_CONFIG`: path of the TOML file (default: `pipeline.toml` if present)
//! - `PIPELINE_DATA_PATH`: overrides `source.data_path`
//! - `HOST`: overrides `server.host`
//! - `PORT`: overrides `server.port`

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReportError, ReportResult};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "PIPELINE_CONFIG";

/// Configuration file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "pipeline.toml";

/// Contact owners whose opportunities are reported by default.
pub const DEFAULT_OWNERS: [&str; 4] = [
    "dan@rocketramp.ai",
    "adam@rocketramp.ai",
    "alex@rocketramp.ai",
    "chris@rocketramp.ai",
];

/// Full dashboard configuration. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub chart: ChartSettings,
}

/// Input export and owner allow-list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSettings {
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    #[serde(default = "default_owners")]
    pub owners: Vec<String>,
}

/// Bind address of the HTTP server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Chart layout and highlight styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSettings {
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_highlight_color")]
    pub highlight_color: String,
    #[serde(default = "default_highlight_width")]
    pub highlight_width: u32,
    #[serde(default = "default_top_performers")]
    pub top_performers: usize,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("Project_Quantum_Leap.csv")
}

fn default_owners() -> Vec<String> {
    DEFAULT_OWNERS.iter().map(|s| s.to_string()).collect()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_height() -> u32 {
    800
}

fn default_highlight_color() -> String {
    "gold".to_string()
}

fn default_highlight_width() -> u32 {
    4
}

fn default_top_performers() -> usize {
    2
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            owners: default_owners(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            height: default_height(),
            highlight_color: default_highlight_color(),
            highlight_width: default_highlight_width(),
            top_performers: default_top_performers(),
        }
    }
}

impl DashboardConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ReportResult<Self> {
        let config: DashboardConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| ReportError::io(path.display().to_string(), e))?;
        Self::from_toml_str(&content)
    }

    /// Resolve the configuration the server runs with.
    ///
    /// Reads `$PIPELINE_CONFIG` if set, else `pipeline.toml` if it exists,
    /// else defaults; environment overrides are applied last.
    pub fn load() -> ReportResult<Self> {
        let mut config = match env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            Err(_) => Self::default(),
        };
        config.apply_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `PIPELINE_DATA_PATH`, `HOST` and `PORT` overrides from `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ReportResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("PIPELINE_DATA_PATH") {
            self.source.data_path = PathBuf::from(path);
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ReportError::invalid_setting("PORT", "must be a valid port number"))?;
        }
        self.validate()
    }

    fn validate(&self) -> ReportResult<()> {
        if self.source.owners.iter().any(|o| o.trim().is_empty()) {
            return Err(ReportError::invalid_setting(
                "source.owners",
                "owner identities must not be blank",
            ));
        }
        if self.chart.height == 0 {
            return Err(ReportError::invalid_setting(
                "chart.height",
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    /// `host:port` string for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

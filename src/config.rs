//! Configuration loading and management.
//!
//! Configuration is loaded from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. `.sql-schema-report.toml` in current directory
//! 4. `~/.config/sql-schema-report/config.toml`
//! 5. Default values
//!
//! # Configuration File Format
//!
//! ```toml
//! [scan]
//! input_dir = "database-scripts"
//! extension = "sql"
//!
//! [report]
//! output = "docs/index.html"
//! project_name = "Sample Project"
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `SQL_REPORT_INPUT_DIR` | Directory scanned for SQL files |
//! | `SQL_REPORT_OUTPUT` | Path of the generated HTML file |
//! | `SQL_REPORT_PROJECT` | Project name shown in the report |

use std::{
    env, fs,
    path::{Path, PathBuf}
};

use serde::Deserialize;

use crate::error::{AppResult, config_error};

/// Name of the per-project config file
pub const LOCAL_CONFIG_FILE: &str = ".sql-schema-report.toml";

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scan:   ScanConfig,
    #[serde(default)]
    pub report: ReportConfig
}

/// Input discovery configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory holding the SQL files
    pub input_dir: PathBuf,
    /// File extension to match, without the dot
    pub extension: String
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("database-scripts"),
            extension: String::from("sql")
        }
    }
}

/// HTML report configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Output HTML file
    pub output:       PathBuf,
    /// Project name shown in the overview
    pub project_name: String
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output:       PathBuf::from("docs/index.html"),
            project_name: String::from("Sample Project")
        }
    }
}

impl Config {
    /// Load configuration from file and environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file in current directory (.sql-schema-report.toml)
    /// 3. Config file in home directory
    ///    (~/.config/sql-schema-report/config.toml)
    /// 4. Default values
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("sql-schema-report")
                .join("config.toml");

            if home_config.exists() {
                config = Self::from_file(&home_config)?;
            }
        }

        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            config = Self::from_file(&local_config)?;
        }

        config.apply_env();
        Ok(config)
    }

    /// Parse a single TOML config file
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| config_error(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|e| config_error(format!("Invalid config file: {}", e)))
    }

    fn apply_env(&mut self) {
        if let Ok(dir) = env::var("SQL_REPORT_INPUT_DIR") {
            self.scan.input_dir = PathBuf::from(dir);
        }

        if let Ok(output) = env::var("SQL_REPORT_OUTPUT") {
            self.report.output = PathBuf::from(output);
        }

        if let Ok(project) = env::var("SQL_REPORT_PROJECT") {
            self.report.project_name = project;
        }
    }
}

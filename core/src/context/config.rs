//! Optional TOML configuration
//!
//! ```toml
//! output = "reports/cleaned.txt"
//! csv_output = "reports/cleaned.csv"
//! export_mode = "players"
//! timestamp_formats = ["calendar", "relative"]
//! boss = "gallywix"
//! ```
//!
//! Every key is optional. Command-line flags take precedence.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::report::ExportMode;
use crate::transcript::TimestampFormat;

pub const DEFAULT_OUTPUT: &str = "cleaned_data.txt";
pub const DEFAULT_CSV_OUTPUT: &str = "cleaned_data.csv";

const CONFIG_DIR: &str = "pullsift";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub output: Option<PathBuf>,
    pub csv_output: Option<PathBuf>,
    pub export_mode: ExportMode,
    /// Recognized timestamp shapes, tried in this order
    pub timestamp_formats: Vec<TimestampFormat>,
    /// Boss slug; skips content detection when set
    pub boss: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: None,
            csv_output: None,
            export_mode: ExportMode::default(),
            timestamp_formats: TimestampFormat::ALL.to_vec(),
            boss: None,
        }
    }
}

impl AppConfig {
    /// `<config dir>/pullsift/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Loads an explicitly named file; a missing file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Loads the default file if there is one, defaults otherwise. The file
    /// is never created.
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "Loading config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// `path` is only used for error messages.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason,
        };

        if self.timestamp_formats.is_empty() {
            return Err(invalid("timestamp_formats must name at least one format".into()));
        }
        if let Some(dup) = self
            .timestamp_formats
            .iter()
            .enumerate()
            .find(|(i, format)| self.timestamp_formats[..*i].contains(*format))
            .map(|(_, format)| format)
        {
            return Err(invalid(format!("timestamp format '{dup}' is listed twice")));
        }
        if let Some(boss) = &self.boss
            && boss.trim().is_empty()
        {
            return Err(invalid("boss must not be empty".into()));
        }
        Ok(())
    }
}

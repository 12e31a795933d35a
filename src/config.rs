use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration for a scan.
///
/// Every field has a default, so a config file only needs the keys it changes.
///
/// ```rust,no_run
/// use exif_table::config::Config;
///
/// // From a JSON file (defaults when the file is missing)
/// let config = Config::load(Some("exif-table.json".as_ref())).unwrap();
///
/// // Or use defaults and customize
/// let mut config = Config::default();
/// config.output.delimiter = '\t';
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Delimited output settings.
    pub output: OutputConfig,
    /// Directory traversal settings.
    pub scan: ScanConfig,
}

/// Delimited output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Field separator, `;` by default. `,` and `\t` are common alternatives.
    pub delimiter: char,
    /// Write the `directory;name;...` header line first.
    pub write_header: bool,
}

/// Directory traversal settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Descend into symlinked directories and read symlinked files.
    pub follow_links: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            delimiter: ';',
            write_header: true,
        }
    }
}

impl Config {
    /// Load config from the given path. A missing path or file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(config_path) = path else {
            return Ok(Self::default());
        };

        if !config_path.exists() {
            log::warn!(
                "Config file not found at {}. Using defaults.",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents =
            std::fs::read_to_string(config_path).context("Failed to read config file")?;
        let config: Config =
            serde_json::from_str(&contents).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Save config as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, contents).context("Failed to write config file")?;
        log::info!("Config saved to {}", path.display());
        Ok(())
    }
}

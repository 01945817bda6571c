use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "cpap-tracker";
const DATA_FILE: &str = "cpap_data.sqlite";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// SQLite file holding the entries slot
    pub data_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
        }
    }
}

fn default_data_path() -> PathBuf {
    dirs::data_dir()
        .or_else(|| dirs::home_dir().map(|p| p.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(DATA_FILE)
}

impl Settings {
    /// Load settings from `path`, the default config location, or fall back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let candidates = [
            path.map(Path::to_path_buf),
            dirs::config_dir().map(|p| p.join(APP_DIR).join("config.toml")),
        ];

        for candidate in candidates.iter().flatten() {
            if candidate.exists() {
                let content = std::fs::read_to_string(candidate)
                    .with_context(|| format!("Failed to read config file: {:?}", candidate))?;
                return toml::from_str(&content)
                    .with_context(|| format!("Failed to parse config file: {:?}", candidate));
            }
        }

        Ok(Self::default())
    }

    /// CLI flags take precedence over the file
    pub fn merge_cli(&mut self, data_path: Option<PathBuf>) {
        if let Some(p) = data_path {
            self.data_path = p;
        }
    }
}

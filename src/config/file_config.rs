use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub catalog_path: Option<String>,
    pub port: Option<u16>,
    pub logging_level: Option<String>,
    pub frontend_dir_path: Option<String>,
    pub default_count: Option<usize>,

    // Feature configs
    pub detector: Option<DetectorConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct DetectorConfig {
    /// Base URL of the text-classification service, detection is disabled when unset.
    pub url: Option<String>,
    pub model: Option<String>,
    pub api_token: Option<String>,
    pub timeout_sec: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

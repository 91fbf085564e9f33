mod file_config;

pub use file_config::{DetectorConfig, FileConfig};

use crate::emotion::DEFAULT_DETECTOR_MODEL;
use crate::recommend::DEFAULT_RECOMMENDATION_COUNT;
use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub catalog_path: Option<PathBuf>,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub default_count: usize,
    pub detector_url: Option<String>,
    pub detector_model: String,
    pub detector_token: Option<String>,
    pub detector_timeout_sec: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            port: 3001,
            logging_level: RequestsLoggingLevel::default(),
            frontend_dir_path: None,
            default_count: DEFAULT_RECOMMENDATION_COUNT,
            detector_url: None,
            detector_model: DEFAULT_DETECTOR_MODEL.to_string(),
            detector_token: None,
            detector_timeout_sec: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog_path: PathBuf,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub default_count: usize,

    pub detector: Option<DetectorSettings>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetectorSettings {
    pub url: String,
    pub model: String,
    pub api_token: Option<String>,
    pub timeout_sec: u64,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let catalog_path = file
            .catalog_path
            .map(PathBuf::from)
            .or_else(|| cli.catalog_path.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("catalog_path must be specified on the command line or in config file")
            })?;

        if !catalog_path.exists() {
            bail!("Catalog file does not exist: {:?}", catalog_path);
        }
        if !catalog_path.is_file() {
            bail!("catalog_path is not a file: {:?}", catalog_path);
        }

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());

        let default_count = file.default_count.unwrap_or(cli.default_count);
        if default_count == 0 {
            bail!("default_count must be at least 1");
        }

        // Detector settings - [detector] table takes precedence over CLI args
        let detector_file = file.detector.unwrap_or_default();
        let detector = detector_file
            .url
            .or_else(|| cli.detector_url.clone())
            .map(|url| DetectorSettings {
                url,
                model: detector_file
                    .model
                    .unwrap_or_else(|| cli.detector_model.clone()),
                api_token: detector_file
                    .api_token
                    .or_else(|| cli.detector_token.clone()),
                timeout_sec: detector_file
                    .timeout_sec
                    .unwrap_or(cli.detector_timeout_sec),
            });

        Ok(Self {
            catalog_path,
            port,
            logging_level,
            frontend_dir_path,
            default_count,
            detector,
        })
    }
}

fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}

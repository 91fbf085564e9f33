use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use moodtune::catalog::CatalogCache;
use moodtune::config;
use moodtune::emotion::{EmotionDetector, HuggingFaceEmotionDetector, DEFAULT_DETECTOR_MODEL};
use moodtune::recommend::DEFAULT_RECOMMENDATION_COUNT;
use moodtune::server::{run_server, RequestsLoggingLevel, ServerConfig};
use moodtune::service::RecommendationService;

fn parse_path(s: &str) -> Result<PathBuf, String> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(format!("Error resolving path '{}': {}", s, msg));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir().map_err(|e| format!("Failed to get current dir: {}", e))?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the tracks CSV file. Can also be specified in config file.
    #[clap(value_parser = parse_path)]
    pub catalog_path: Option<PathBuf>,

    /// Path to TOML configuration file. Values in the file override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Path to the frontend directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,

    /// Number of tracks returned when a request doesn't ask for a count.
    #[clap(long, default_value_t = DEFAULT_RECOMMENDATION_COUNT)]
    pub default_count: usize,

    /// Base URL of the emotion classification service. Text recommendations
    /// are disabled when not set.
    #[clap(long)]
    pub detector_url: Option<String>,

    /// Model used for emotion classification.
    #[clap(long, default_value = DEFAULT_DETECTOR_MODEL)]
    pub detector_model: String,

    /// Bearer token for the emotion classification service.
    #[clap(long)]
    pub detector_token: Option<String>,

    /// Timeout in seconds for emotion classification requests.
    #[clap(long, default_value_t = 30)]
    pub detector_timeout_sec: u64,
}

/// Convert CLI args to CliConfig for config resolution
impl From<&CliArgs> for config::CliConfig {
    fn from(args: &CliArgs) -> Self {
        config::CliConfig {
            catalog_path: args.catalog_path.clone(),
            port: args.port,
            logging_level: args.logging_level.clone(),
            frontend_dir_path: args.frontend_dir_path.clone(),
            default_count: args.default_count,
            detector_url: args.detector_url.clone(),
            detector_model: args.detector_model.clone(),
            detector_token: args.detector_token.clone(),
            detector_timeout_sec: args.detector_timeout_sec,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    // Load TOML config if provided
    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            Some(config::FileConfig::load(path)?)
        }
        None => None,
    };

    // Resolve final configuration (TOML overrides CLI)
    let cli_config: config::CliConfig = (&cli_args).into();
    let app_config = config::AppConfig::resolve(&cli_config, file_config)?;

    info!("Configuration loaded:");
    info!("  catalog_path: {:?}", app_config.catalog_path);
    info!("  port: {}", app_config.port);
    info!("  logging_level: {}", app_config.logging_level);
    info!("  default_count: {}", app_config.default_count);

    let detector: Option<Arc<dyn EmotionDetector>> = match &app_config.detector {
        Some(settings) => {
            info!(
                "Emotion detector configured at {} (model {})",
                settings.url, settings.model
            );
            Some(Arc::new(HuggingFaceEmotionDetector::new(
                settings.url.clone(),
                settings.model.clone(),
                settings.api_token.clone(),
                settings.timeout_sec,
            )))
        }
        None => {
            warn!("No emotion detector configured, text recommendations are disabled");
            None
        }
    };

    // Load once up front so a broken catalog fails at startup, not on the first request.
    let catalog_cache = CatalogCache::global();
    info!("Loading catalog at {:?}...", app_config.catalog_path);
    let catalog = catalog_cache.get_or_load(&app_config.catalog_path)?;
    info!("Catalog ready with {} tracks", catalog.len());

    let service = Arc::new(RecommendationService::new(
        app_config.catalog_path.clone(),
        catalog_cache,
        detector,
        app_config.default_count,
    ));

    let server_config = ServerConfig {
        requests_logging_level: app_config.logging_level,
        port: app_config.port,
        frontend_dir_path: app_config.frontend_dir_path,
    };

    info!("Ready to serve at port {}!", server_config.port);
    run_server(server_config, service).await
}

use shared_types::{parse_app_config, AppConfig, AppError};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml` once and keep it for the process lifetime.
///
/// A missing or invalid file falls back to defaults (all flags off, gates
/// redirect to `/`). Web builds have no filesystem and always take defaults.
pub fn load_app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| match read_app_config(CONFIG_PATH) {
        Ok(config) => {
            tracing::info!(features = ?config.features, "loaded {CONFIG_PATH}");
            config
        }
        Err(err) => {
            tracing::warn!(%err, "using default config");
            AppConfig::default()
        }
    })
}

fn read_app_config(path: &str) -> Result<AppConfig, AppError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| AppError::config(format!("{path}: {e}")))?;
    parse_app_config(&contents)
}

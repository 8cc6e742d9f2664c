use serde::{Deserialize, Serialize};

use crate::{AppError, FeatureFlags, ROOT_PATH};

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub navigation: NavigationConfig,
}

/// Navigation settings for the app's route gates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationConfig {
    /// Where gated routes send visitors who fail the check.
    #[serde(default = "default_gate_redirect")]
    pub gate_redirect: String,
}

fn default_gate_redirect() -> String {
    ROOT_PATH.to_string()
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            gate_redirect: default_gate_redirect(),
        }
    }
}

/// Parse and validate the contents of `config.toml`.
pub fn parse_app_config(contents: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(contents)?;
    if !config.navigation.gate_redirect.starts_with('/') {
        return Err(AppError::config(format!(
            "navigation.gate_redirect must be an absolute path, got {:?}",
            config.navigation.gate_redirect
        )));
    }
    Ok(config)
}

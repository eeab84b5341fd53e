use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::cli::Args;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct YamlConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub verbose: Option<bool>,
}

#[derive(Debug)]
pub struct Config {
    /// Backend base URL. Empty string means same-origin relative paths,
    /// matching the deployed setup where a proxy fronts the API.
    pub api_base_url: String,
    pub verbose: bool,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Result<Self, String> {
        // A broken config file is reported, not silently ignored.
        let yaml_config = YamlConfig::load().map_err(|e| format!("{:#}", e))?;

        // Base URL: CLI args > env var > YAML config > empty fallback
        let api_base_url = args
            .api_base_url
            .clone()
            .or_else(|| env::var("PAWCHAT_API_BASE_URL").ok())
            .or(yaml_config.api.base_url.clone())
            .unwrap_or_default();

        // Verbose flag: env var > YAML config > default
        let verbose = env::var("PAWCHAT_VERBOSE")
            .ok()
            .map(|v| v == "true")
            .or(yaml_config.verbose)
            .unwrap_or(false);

        Ok(Config {
            api_base_url,
            verbose,
        })
    }
}

impl YamlConfig {
    pub fn load() -> Result<Self> {
        for path in Self::config_paths() {
            if path.exists() {
                let contents = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;
                let config: YamlConfig = serde_yaml::from_str(&contents).with_context(|| {
                    format!("Failed to parse YAML config file: {}", path.display())
                })?;
                return Ok(config);
            }
        }

        Ok(YamlConfig::default())
    }

    pub fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. Current directory (local override)
        paths.push(PathBuf::from(".pawchat.yaml"));
        paths.push(PathBuf::from(".pawchat.yml"));

        // 2. User's config directory
        if let Some(home_dir) = dirs::home_dir() {
            let config_dir = home_dir.join(".config").join("pawchat");
            paths.push(config_dir.join("pawchat.yaml"));
            paths.push(config_dir.join("pawchat.yml"));
        }

        paths
    }
}

mod api;
mod boards;

use crate::cli::Args;
use crate::session::SessionConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub use api::ApiConfig;
pub use boards::BoardsConfig;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/query";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionSection {
    #[serde(default)]
    pub verbose: Option<bool>,
}

impl Default for SessionSection {
    fn default() -> Self {
        Self { verbose: None }
    }
}

/// Fully resolved runtime configuration.
pub struct Config {
    pub endpoint: String,
    /// Seconds before an in-flight request is abandoned. `None` waits
    /// indefinitely.
    pub request_timeout: Option<u64>,
    pub verbose: bool,
    /// Initial values for the session's credential and board fields; all
    /// editable later through `/set`.
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct YamlConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub boards: BoardsConfig,
    #[serde(default)]
    pub session: SessionSection,
}

impl Config {
    /// Resolve configuration with precedence CLI args > env vars > YAML
    /// config file > defaults. API keys are taken from args and env only
    /// (never from a config file on disk); board identifiers may also come
    /// from the file.
    pub fn from_env_and_args(args: &Args) -> Self {
        let yaml_config = YamlConfig::load().unwrap_or_default();

        let endpoint = args
            .endpoint
            .clone()
            .or_else(|| env::var("BI_ENDPOINT").ok())
            .or(yaml_config.api.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let request_timeout = args
            .timeout
            .or_else(|| {
                env::var("BI_REQUEST_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
            })
            .or(yaml_config.api.request_timeout);

        let verbose = args.verbose
            || env::var("BI_VERBOSE").ok().map(|v| v == "true").unwrap_or(false)
            || yaml_config.session.verbose.unwrap_or(false);

        let monday_api_key = args
            .monday_api_key
            .clone()
            .or_else(|| env::var("MONDAY_API_KEY").ok())
            .unwrap_or_default();

        let gemini_api_key = args
            .gemini_api_key
            .clone()
            .or_else(|| env::var("GEMINI_API_KEY").ok())
            .unwrap_or_default();

        let deals_board_id = args
            .deals_board_id
            .clone()
            .or_else(|| env::var("DEALS_BOARD_ID").ok())
            .or(yaml_config.boards.deals_board_id.clone())
            .unwrap_or_default();

        let work_orders_board_id = args
            .work_orders_board_id
            .clone()
            .or_else(|| env::var("WORK_ORDERS_BOARD_ID").ok())
            .or(yaml_config.boards.work_orders_board_id.clone())
            .unwrap_or_default();

        Config {
            endpoint,
            request_timeout,
            verbose,
            session: SessionConfig {
                monday_api_key,
                gemini_api_key,
                deals_board_id,
                work_orders_board_id,
            },
        }
    }
}

impl YamlConfig {
    pub fn load() -> Result<Self> {
        let config_paths = Self::get_config_paths();

        for path in config_paths {
            if path.exists() {
                return Self::load_path(&path);
            }
        }

        // No config file found, return default
        Ok(YamlConfig::default())
    }

    pub fn load_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse YAML config file: {}", path.display()))
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. Current directory (highest priority - local override)
        paths.push(PathBuf::from(".monday-bi.yaml"));
        paths.push(PathBuf::from(".monday-bi.yml"));

        // 2. User's config directory (global config)
        if let Some(home_dir) = dirs::home_dir() {
            let config_dir = home_dir.join(".config").join("monday-bi");
            paths.push(config_dir.join("monday-bi.yaml"));
            paths.push(config_dir.join("monday-bi.yml"));
        }

        paths
    }
}

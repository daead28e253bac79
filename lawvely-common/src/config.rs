//! Configuration loading and root folder resolution

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Environment variable naming the lawvely root folder
pub const ROOT_FOLDER_ENV: &str = "LAWVELY_ROOT_FOLDER";

/// Environment variable carrying the OpenAI API key
pub const OPENAI_API_KEY_ENV: &str = "LAWVELY_OPENAI_API_KEY";

const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// OpenAI gateway configuration, passed explicitly to the clients that
/// need it (never read from process globals inside the pipeline).
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Bearer-token credential
    pub api_key: String,
    /// Model identifier sent with every completion request
    pub model: String,
    /// API base URL (overridable for tests and proxies)
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Resolve the API key following the priority order:
    /// 1. Command-line argument (highest priority)
    /// 2. Environment variable
    /// 3. TOML config file (`openai_api_key` key)
    pub fn resolve(cli_key: Option<&str>) -> Result<Self> {
        if let Some(key) = cli_key {
            return Ok(Self::new(key));
        }

        if let Ok(key) = std::env::var(OPENAI_API_KEY_ENV) {
            if !key.trim().is_empty() {
                return Ok(Self::new(key));
            }
        }

        if let Ok(config_path) = locate_config_file() {
            if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
                if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                    if let Some(key) = config.get("openai_api_key").and_then(|v| v.as_str()) {
                        return Ok(Self::new(key));
                    }
                }
            }
        }

        Err(Error::Config(format!(
            "No OpenAI API key found: pass --api-key, set {}, or add openai_api_key to the config file",
            OPENAI_API_KEY_ENV
        )))
    }
}

/// Root folder resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_root_folder(cli_arg: Option<&str>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(ROOT_FOLDER_ENV) {
        return PathBuf::from(path);
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = locate_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(root_folder) = config.get("root_folder").and_then(|v| v.as_str()) {
                    return PathBuf::from(root_folder);
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    default_root_folder()
}

/// Ensure the root folder exists and return the database path inside it.
pub fn database_path(root_folder: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(root_folder)?;
    Ok(root_folder.join("lawvely.db"))
}

/// Locate the platform config file (~/.config/lawvely/config.toml on
/// Linux, with /etc/lawvely/config.toml as a system-wide fallback).
fn locate_config_file() -> Result<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("lawvely").join("config.toml"));

    if let Some(path) = user_config {
        if path.exists() {
            return Ok(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/lawvely/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
    }

    Err(Error::Config("No config file found".to_string()))
}

/// OS-dependent default root folder path
fn default_root_folder() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("lawvely"))
        .unwrap_or_else(|| PathBuf::from("./lawvely_data"))
}

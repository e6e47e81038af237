//! Configuration loader
//!
//! ## Loading Strategy
//! 1. `.env` in the working directory (if any) is loaded into the process
//!    environment via `dotenvy`
//! 2. A config file is probed for; missing files mean built-in defaults
//! 3. Environment variables override whatever the file said
//!
//! ## Environment Variables
//! - `CRMDESK_API_BASE_URL`: backend origin (default `http://localhost:5000`)
//! - `CRMDESK_API_USER_AGENT`: optional `User-Agent` override
//! - `CRMDESK_STORAGE_PATH`: JSON file holding the persisted session
//! - `CRMDESK_PAGE_SIZE`: maximum rows per rendered table
//!
//! ## File Locations
//! The loader probes the following names (in order) in the working
//! directory, its two parents, and next to the executable:
//! `crmdesk.toml`, `crmdesk.json`, `config.toml`, `config.json`.

use std::path::{Path, PathBuf};

use crmdesk_domain::{Config, CrmError, Result};

pub const ENV_API_BASE_URL: &str = "CRMDESK_API_BASE_URL";
pub const ENV_API_USER_AGENT: &str = "CRMDESK_API_USER_AGENT";
pub const ENV_STORAGE_PATH: &str = "CRMDESK_STORAGE_PATH";
pub const ENV_PAGE_SIZE: &str = "CRMDESK_PAGE_SIZE";

const CONFIG_FILE_NAMES: [&str; 4] = ["crmdesk.toml", "crmdesk.json", "config.toml", "config.json"];

/// Load configuration: `.env`, then file (or defaults), then env overrides.
///
/// # Errors
/// Returns `CrmError::Config` if a found config file is malformed or an
/// environment variable has an invalid value.
pub fn load() -> Result<Config> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "Ignoring unreadable .env file"),
    }

    let mut config = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(&mut config)?;
    tracing::info!(base_url = %config.api.base_url, storage = %config.storage.path, "Configuration loaded");
    Ok(config)
}

/// Defaults overlaid with environment variables only.
///
/// # Errors
/// Returns `CrmError::Config` if a variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Format is picked by
/// extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `CrmError::Config` if the file is missing, unreadable, or
/// malformed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(CrmError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            CrmError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| CrmError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| CrmError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| CrmError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(CrmError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// First existing config file in the standard locations.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.extend(cwd.ancestors().take(3).map(Path::to_path_buf));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    probe_in(&dirs)
}

fn probe_in(dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Some(base_url) = env_var(ENV_API_BASE_URL) {
        config.api.base_url = base_url;
    }
    if let Some(agent) = env_var(ENV_API_USER_AGENT) {
        config.api.user_agent = Some(agent);
    }
    if let Some(path) = env_var(ENV_STORAGE_PATH) {
        config.storage.path = path;
    }
    if let Some(raw) = env_var(ENV_PAGE_SIZE) {
        let page_size = raw
            .parse::<usize>()
            .ok()
            .filter(|size| *size > 0)
            .ok_or_else(|| CrmError::Config(format!("Invalid page size: {raw}")))?;
        config.ui.page_size = page_size;
    }
    Ok(())
}

/// Non-empty environment variable, trimmed.
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive).
/// Returns `default` if the variable is not set.
pub fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

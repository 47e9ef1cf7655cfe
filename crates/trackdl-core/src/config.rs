use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable that overrides the configured API key.
pub const API_KEY_ENV: &str = "TRACKDL_API_KEY";

fn default_api_host() -> String {
    "spotify-downloader9.p.rapidapi.com".to_string()
}

fn default_relay_url() -> String {
    "https://api.codetabs.com/v1/proxy".to_string()
}

fn default_lookup_timeout_secs() -> u64 {
    30
}

/// Global configuration loaded from `~/.config/trackdl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackdlConfig {
    /// RapidAPI host of the track lookup service.
    #[serde(default = "default_api_host")]
    pub api_host: String,
    /// Pass-through relay that streams the resolved audio URL back to us.
    #[serde(default = "default_relay_url")]
    pub relay_url: String,
    /// Upper bound for the metadata lookup call, in seconds.
    #[serde(default = "default_lookup_timeout_secs")]
    pub lookup_timeout_secs: u64,
    /// Lookup API credential. `TRACKDL_API_KEY` in the environment takes
    /// precedence; nothing is compiled into the binary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for TrackdlConfig {
    fn default() -> Self {
        Self {
            api_host: default_api_host(),
            relay_url: default_relay_url(),
            lookup_timeout_secs: default_lookup_timeout_secs(),
            api_key: None,
        }
    }
}

impl TrackdlConfig {
    /// Resolves the lookup credential: environment first, config file second.
    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| self.api_key.clone().filter(|v| !v.is_empty()))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("trackdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TrackdlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = TrackdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: TrackdlConfig = toml::from_str(&data)?;
    Ok(cfg)
}

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{ensure, Context};
use jobby_engine::{ApiSettings, DEFAULT_BASE_URL};
use jobby_logging::jobby_info;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "./jobby.ron";

/// Longest session a config may ask for, in days.
pub const MAX_SESSION_TTL_DAYS: u32 = 3650;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub session_file: PathBuf,
    pub session_ttl_days: u32,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            session_file: PathBuf::from("./.jobby_session.ron"),
            session_ttl_days: 5,
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}

impl AppConfig {
    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            base_url: self.api_base_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }

    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::days(i64::from(self.session_ttl_days.min(MAX_SESSION_TTL_DAYS)))
    }
}

/// Reads the configuration file. A missing file means defaults; a file that
/// exists but does not parse is an error.
pub fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            jobby_info!("No config at {:?}, using defaults", path);
            return Ok(AppConfig::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("reading config {}", path.display()));
        }
    };

    let config: AppConfig = ron::from_str(&content)
        .with_context(|| format!("parsing config {}", path.display()))?;
    ensure!(
        (1..=MAX_SESSION_TTL_DAYS).contains(&config.session_ttl_days),
        "config {}: session_ttl_days must be between 1 and {}, got {}",
        path.display(),
        MAX_SESSION_TTL_DAYS,
        config.session_ttl_days
    );
    jobby_info!("Loaded config from {:?}", path);
    Ok(config)
}

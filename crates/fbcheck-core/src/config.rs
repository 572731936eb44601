use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User-Agent sent with every probe so database owners can identify the tool.
pub const DEFAULT_USER_AGENT: &str = "Firebase-Public-Checker/1.0";

/// Upper bound for any timeout, in seconds (one day). libcurl rejects
/// out-of-range values before a request is ever sent.
pub const MAX_TIMEOUT_SECS: u64 = 86_400;

/// Global configuration loaded from `~/.config/fbcheck/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Total timeout in seconds for each read probe and the write probe.
    pub timeout_secs: u64,
    /// Timeout in seconds for the best-effort DELETE after a successful write.
    pub cleanup_timeout_secs: u64,
    /// Connect timeout in seconds (capped by `timeout_secs`).
    pub connect_timeout_secs: u64,
    /// Pause between consecutive requests in milliseconds.
    pub request_delay_ms: u64,
    /// User-Agent header value.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            cleanup_timeout_secs: 5,
            connect_timeout_secs: 10,
            request_delay_ms: 500,
            user_agent: default_user_agent(),
        }
    }
}

impl CheckerConfig {
    /// Returns a copy with the per-request timeout replaced (e.g. from `--timeout`).
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn cleanup_timeout(&self) -> Duration {
        Duration::from_secs(self.cleanup_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs.min(self.timeout_secs))
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// Every timeout must lie in `1..=MAX_TIMEOUT_SECS`.
    pub fn validate(&self) -> Result<()> {
        for (name, secs) in [
            ("timeout_secs", self.timeout_secs),
            ("cleanup_timeout_secs", self.cleanup_timeout_secs),
            ("connect_timeout_secs", self.connect_timeout_secs),
        ] {
            if !(1..=MAX_TIMEOUT_SECS).contains(&secs) {
                bail!("{} must be between 1 and {}, got {}", name, MAX_TIMEOUT_SECS, secs);
            }
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fbcheck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CheckerConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Like [`load_or_init`] but at an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<CheckerConfig> {
    if !path.exists() {
        let default_cfg = CheckerConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CheckerConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate().with_context(|| format!("invalid {}", path.display()))?;
    Ok(cfg)
}

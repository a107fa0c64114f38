//! Configuration for MBTI Snap.
//!
//! Read from `~/.mbti-snap/config.toml`. Every section is optional; a missing
//! file is the same as an empty one.
//!
//! ```toml
//! [app]
//! ascii_only = false
//! high_contrast = false
//! reduced_motion = false
//!
//! [share]
//! base_url = "${MBTI_SNAP_URL}"
//!
//! [export]
//! dir = "~/Pictures"
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use snap_types::ui::UiOptions;

pub const DEFAULT_SHARE_BASE_URL: &str = "https://mbti-snap.app";

const ASCII_ENV: &str = "MBTI_SNAP_ASCII";
const HIGH_CONTRAST_ENV: &str = "MBTI_SNAP_HIGH_CONTRAST";

#[derive(Debug, Default, Deserialize)]
pub struct SnapConfig {
    pub app: Option<AppConfig>,
    pub share: Option<ShareConfig>,
    pub export: Option<ExportConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and bars.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable progress-bar easing and other motion.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ShareConfig {
    /// Prefix for shared result links. Supports `${VAR}` expansion.
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExportConfig {
    /// Directory result cards are saved to. Supports `${VAR}` and a leading `~`.
    pub dir: Option<String>,
}

/// Replace `${VAR}` with the environment value (empty when unset).
#[must_use]
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let var = &after[..end];
                if !var.is_empty() {
                    out.push_str(&env::var(var).unwrap_or_default());
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

fn expand_home(value: &str) -> PathBuf {
    match value.strip_prefix("~/") {
        Some(rest) => dirs::home_dir().map_or_else(|| PathBuf::from(value), |home| home.join(rest)),
        None if value == "~" => dirs::home_dir().unwrap_or_else(|| PathBuf::from(value)),
        None => PathBuf::from(value),
    }
}

fn env_flag(value: Option<String>) -> bool {
    matches!(
        value.as_deref().map(str::trim),
        Some("1" | "true" | "TRUE" | "yes" | "on")
    )
}

impl SnapConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// UI options from `[app]`, with `MBTI_SNAP_ASCII` / `MBTI_SNAP_HIGH_CONTRAST` overrides.
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options_with_env(|key| env::var(key).ok())
    }

    fn ui_options_with_env(&self, lookup: impl Fn(&str) -> Option<String>) -> UiOptions {
        let app = self.app.as_ref();
        UiOptions {
            ascii_only: app.is_some_and(|a| a.ascii_only) || env_flag(lookup(ASCII_ENV)),
            high_contrast: app.is_some_and(|a| a.high_contrast)
                || env_flag(lookup(HIGH_CONTRAST_ENV)),
            reduced_motion: app.is_some_and(|a| a.reduced_motion),
        }
    }

    /// Share link prefix without a trailing slash.
    #[must_use]
    pub fn share_base_url(&self) -> String {
        let configured = self
            .share
            .as_ref()
            .and_then(|share| share.base_url.as_deref())
            .map(expand_env_vars)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        configured.unwrap_or_else(|| DEFAULT_SHARE_BASE_URL.to_string())
    }

    /// Where exported result cards go. Defaults to the working directory.
    #[must_use]
    pub fn export_dir(&self) -> PathBuf {
        self.export
            .as_ref()
            .and_then(|export| export.dir.as_deref())
            .map(expand_env_vars)
            .map(|dir| dir.trim().to_string())
            .filter(|dir| !dir.is_empty())
            .map_or_else(|| PathBuf::from("."), |dir| expand_home(&dir))
    }
}

pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".mbti-snap"))
}

pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

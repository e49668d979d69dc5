//! Provider configuration
//!
//! Per-backend settings and the throttle interval, loaded from
//! `~/.config/worldtree/config.toml`. Every field has a default, so an
//! empty or missing file is a valid configuration.

use anyhow::{Context, Result};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

/// Runtime configuration for the dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum spacing between outbound requests, in milliseconds.
    pub min_interval_ms: u64,
    /// The hosted default.
    pub gemini: GeminiConfig,
    /// Mistral settings.
    pub mistral: RemoteConfig,
    /// OpenAI settings.
    pub openai: RemoteConfig,
    /// Stable Horde settings.
    pub horde: HordeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_interval_ms: crate::throttle::MIN_INTERVAL.as_millis() as u64,
            gemini: GeminiConfig::default(),
            mistral: RemoteConfig::default(),
            openai: RemoteConfig::default(),
            horde: HordeConfig::default(),
        }
    }
}

impl Config {
    /// Load from `path`, returning defaults if the file is missing.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
    }

    /// Load from [`Config::path`].
    pub fn load_default() -> Result<Self> {
        Self::load(&Self::path())
    }

    /// Default path: `~/.config/worldtree/config.toml`.
    pub fn path() -> PathBuf {
        config_dir().join("config.toml")
    }

    /// The throttle interval.
    pub fn min_interval(&self) -> Duration {
        Duration::from_millis(self.min_interval_ms)
    }
}

/// Settings for the hosted default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// Model override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<CompactString>,
    /// API key. Takes precedence over `api_key_env`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Environment variable the API key is read from.
    pub api_key_env: CompactString,
    /// Optional API base override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: None,
            api_key: None,
            api_key_env: CompactString::const_new("API_KEY"),
            base_url: None,
        }
    }
}

impl GeminiConfig {
    /// The configured key, falling back to the environment.
    pub fn key(&self) -> Option<String> {
        let present = |k: &str| Some(k.trim().to_owned()).filter(|k| !k.is_empty());
        self.api_key
            .as_deref()
            .and_then(present)
            .or_else(|| {
                std::env::var(self.api_key_env.as_str())
                    .ok()
                    .and_then(|k| present(&k))
            })
    }
}

/// Settings for a chat-completions backend keyed by a stored credential.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Model override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<CompactString>,
    /// Optional endpoint override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Settings for Stable Horde.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HordeConfig {
    /// Value of the `Client-Agent` header.
    pub client_agent: CompactString,
    /// Optional endpoint override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for HordeConfig {
    fn default() -> Self {
        Self {
            client_agent: CompactString::const_new(horde::CLIENT_AGENT),
            base_url: None,
        }
    }
}

/// `~/.config/worldtree`.
pub(crate) fn config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("worldtree")
}

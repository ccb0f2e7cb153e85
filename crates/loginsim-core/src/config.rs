//! Login configuration
//!
//! The accepted credential pair, the profile returned by the simulated fetch
//! and every timer duration come from here, so the controller never embeds
//! fixture values.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{ConfigError, Result};
use crate::lockout::LockoutPolicy;
use crate::profile::Profile;

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration directory under ~/.config
const CONFIG_DIR_NAME: &str = "loginsim";

/// The single credential pair the form accepts
#[derive(Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_password")]
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Exact match on both fields
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(default_username(), default_password())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn default_username() -> String {
    "usuario1".to_string()
}

fn default_password() -> String {
    "123456".to_string()
}

/// Timer durations, in milliseconds on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Simulated fetch latency
    #[serde(default = "default_fetch_delay_ms")]
    pub fetch_delay_ms: u64,

    /// How long an error message stays visible
    #[serde(default = "default_error_clear_ms")]
    pub error_clear_ms: u64,

    /// How long submit stays blocked after too many failures
    #[serde(default = "default_lockout_ms")]
    pub lockout_ms: u64,
}

fn default_fetch_delay_ms() -> u64 {
    2_000
}

fn default_error_clear_ms() -> u64 {
    3_000
}

fn default_lockout_ms() -> u64 {
    10_000
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            fetch_delay_ms: default_fetch_delay_ms(),
            error_clear_ms: default_error_clear_ms(),
            lockout_ms: default_lockout_ms(),
        }
    }
}

impl TimingConfig {
    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }

    pub fn error_clear(&self) -> Duration {
        Duration::from_millis(self.error_clear_ms)
    }

    pub fn lockout(&self) -> Duration {
        Duration::from_millis(self.lockout_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockoutConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

fn default_max_attempts() -> u32 {
    crate::lockout::DEFAULT_MAX_ATTEMPTS
}

impl Default for LockoutConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
        }
    }
}

/// Complete controller configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginConfig {
    #[serde(default)]
    pub credentials: Credentials,

    #[serde(default)]
    pub profile: Profile,

    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub lockout: LockoutConfig,
}

impl LoginConfig {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        // Try XDG_CONFIG_HOME first, then fall back to ~/.config
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg_config).join(CONFIG_DIR_NAME));
        }

        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME))
    }

    /// Get the default config file path
    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a TOML or JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        let config: Self = if is_json(path) {
            serde_json::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        };

        config.validate()?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load an explicit path, or the default file if it exists, or defaults
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Save configuration to a file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = if is_json(path) {
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            self.to_toml()?
        };

        fs::write(path, contents)?;
        tracing::debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Reject values the controller cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.credentials.username.is_empty() || self.credentials.password.is_empty() {
            return Err(ConfigError::Invalid(
                "credentials must have a non-empty username and password".to_string(),
            ));
        }

        if self.lockout.max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "lockout.max_attempts must be at least 1".to_string(),
            ));
        }

        if self.timing.error_clear_ms == 0 || self.timing.lockout_ms == 0 {
            return Err(ConfigError::Invalid(
                "timing.error_clear_ms and timing.lockout_ms must be positive".to_string(),
            ));
        }

        Ok(())
    }

    /// Lockout policy derived from this configuration
    pub fn lockout_policy(&self) -> LockoutPolicy {
        LockoutPolicy::new(self.lockout.max_attempts, self.timing.lockout())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

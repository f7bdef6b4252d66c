//! Static configuration, loaded once before any menu is built.
//!
//! Stored as JSON. Every field has a default, so an empty object (or no
//! file at all) is a valid configuration.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Application directory name under the platform config/cache dirs.
pub const APP_DIR: &str = "retro-menu";

/// Config file name inside [`APP_DIR`].
pub const CONFIG_FILE: &str = "config.json";

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Theme selected at startup.
    pub default_theme: String,
    /// Two clicks on the same row closer than this execute it.
    pub double_click_ms: u64,
    /// Pause after the loading message.
    pub loading_delay_ms: u64,
    /// Pause after the execution message.
    pub execution_delay_ms: u64,
    /// How long to wait after ESC for the rest of an escape sequence.
    pub escape_timeout_ms: u64,
    pub log: LogConfig,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            default_theme: "loki".to_string(),
            double_click_ms: 500,
            loading_delay_ms: 500,
            execution_delay_ms: 300,
            escape_timeout_ms: 25,
            log: LogConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Log directory. None = platform cache dir.
    pub directory: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

/// Cosmetic delays around the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub loading: Duration,
    pub execution: Duration,
}

impl Pacing {
    /// No delays at all (tests, scripted use).
    pub const fn none() -> Self {
        Self {
            loading: Duration::ZERO,
            execution: Duration::ZERO,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        MenuConfig::default().pacing()
    }
}

// ============================================================================
// DERIVED VALUES
// ============================================================================

impl MenuConfig {
    pub fn pacing(&self) -> Pacing {
        Pacing {
            loading: Duration::from_millis(self.loading_delay_ms),
            execution: Duration::from_millis(self.execution_delay_ms),
        }
    }

    pub fn double_click_window(&self) -> Duration {
        Duration::from_millis(self.double_click_ms)
    }

    pub fn escape_timeout(&self) -> Duration {
        Duration::from_millis(self.escape_timeout_ms)
    }
}

// ============================================================================
// LOADING
// ============================================================================

/// Platform default config path, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

impl MenuConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the platform default is
    /// tried and a missing file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => match default_config_path() {
                Some(p) if p.exists() => Self::from_file(&p),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    /// Write as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, contents)
    }
}

// ============================================================================
// TESTS
// ============================================================================

//! Director configuration loading and resolution
//!
//! Config file resolution follows this priority order:
//! 1. Command-line argument (highest priority)
//! 2. `RCAST_CONFIG` environment variable
//! 3. `<config dir>/rcast/config.toml`
//! 4. Compiled defaults (no file at all)
//!
//! A missing file is never fatal; a present file that fails to parse or
//! validate is, so bad thresholds surface before any match starts.

mod sections;
mod validate;

pub use sections::{
    CampConfig, ClockConfig, KillStreakConfig, LoggingConfig, PanelConfig, ProximityConfig,
    RetryConfig, RuntimeConfig, SmoothingConfig, TauntConfig, WeightsConfig,
};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{Error, Result};

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "RCAST_CONFIG";

/// Complete director configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectorConfig {
    pub weights: WeightsConfig,
    pub kill_streak: KillStreakConfig,
    pub proximity: ProximityConfig,
    pub smoothing: SmoothingConfig,
    pub taunts: TauntConfig,
    pub camps: CampConfig,
    pub panels: PanelConfig,
    pub clock: ClockConfig,
    pub runtime: RuntimeConfig,
    pub logging: LoggingConfig,
}

impl DirectorConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str, origin: &Path) -> Result<Self> {
        let config: DirectorConfig = toml::from_str(contents).map_err(|e| Error::Toml {
            path: origin.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file does not exist
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            info!("No config file found, using compiled defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            warn!(
                path = %path.display(),
                "Config file not found, using compiled defaults"
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents, path)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Resolve the config path by priority and load it
    pub fn resolve_and_load(cli_arg: Option<&Path>) -> Result<Self> {
        let path = resolve_config_path(cli_arg, CONFIG_ENV_VAR);
        Self::load_or_default(path.as_deref())
    }
}

/// Resolve the config file path following the documented priority order.
///
/// Returns `None` only when no candidate path can be formed at all.
pub fn resolve_config_path(cli_arg: Option<&Path>, env_var_name: &str) -> Option<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    // Priority 3: Per-user config directory
    default_config_path()
}

/// `<config dir>/rcast/config.toml` for the current platform
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("rcast").join("config.toml"))
}

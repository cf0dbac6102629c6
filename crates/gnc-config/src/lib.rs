//! # gnc-config
//!
//! Layered configuration loading for `gnc` using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GNC_*` prefix, `__` as separator)
//! 2. Project-level `.gnc/config.toml`
//! 3. User-level `~/.config/gnc/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GNC_STORE__DEFAULT_LIMIT` -> `store.default_limit`,
//! `GNC_INSPECTOR__MAX_DEPTH` -> `inspector.max_depth`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use gnc_config::GncConfig;
//!
//! let config = GncConfig::load_with_dotenv().expect("config");
//! println!("default page size: {}", config.store.default_limit);
//! ```

mod error;
mod general;
mod inspector;
mod store;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use inspector::InspectorConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "GNC_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GncConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub inspector: InspectorConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl GncConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer more providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".gnc/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values that would make searches or trees useless.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "store.default_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.inspector.max_depth == 0 {
            return Err(ConfigError::InvalidValue {
                field: "inspector.max_depth".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gnc").join("config.toml"))
    }
}

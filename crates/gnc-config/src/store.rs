//! Repository configuration.

use serde::{Deserialize, Serialize};

/// Default page size for list/search commands.
const fn default_limit() -> usize {
    50
}

const fn default_seed_defaults() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Page size used when a caller does not pass a limit.
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Seed every repository with its default dataset at startup.
    #[serde(default = "default_seed_defaults")]
    pub seed_defaults: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            seed_defaults: default_seed_defaults(),
        }
    }
}

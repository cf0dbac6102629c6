//! General application configuration.

use serde::{Deserialize, Serialize};

const fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Pretty-print JSON output from the CLI.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

use std::path::PathBuf;

use anyhow::Context;
use gnc_config::GncConfig;
use gnc_inspect::FileStructureInspector;
use gnc_store::Repositories;

/// Everything a command handler needs, built once per invocation.
pub struct AppContext {
    pub config: GncConfig,
    pub repos: Repositories,
    cwd: PathBuf,
}

impl AppContext {
    /// Build the repositories, seeding them when `store.seed_defaults` is set.
    pub fn init(config: GncConfig, cwd: PathBuf) -> Self {
        let repos = Repositories::from_config(&config.store);
        Self { config, repos, cwd }
    }

    /// Inspector rooted at `inspector.root`, or the working directory.
    pub fn inspector(&self) -> anyhow::Result<FileStructureInspector> {
        FileStructureInspector::from_config(&self.config.inspector, self.cwd.clone())
            .context("failed to initialize file structure inspector")
    }
}

//! Game configuration loader.

use std::path::Path;

use status_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`GameConfig`] from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing tables and fields fall back to their defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        anyhow::ensure!(
            config.status.max_statuses > 0,
            "status.max_statuses must be at least 1"
        );
        anyhow::ensure!(
            config.runtime.frame_step > 0.0,
            "runtime.frame_step must be positive (got {})",
            config.runtime.frame_step
        );

        Ok(config)
    }
}

//! Content factory for building a status catalog from data files.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use status_core::{GameConfig, StatusCatalog, StatusDefinition};

use crate::effects::register_builtin;
use crate::loaders::{ConfigLoader, DefinitionLoader, LoadResult};

/// Content factory that loads status content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── statuses.ron
/// ```
///
/// Both files are optional. A missing `config.toml` yields the default
/// configuration and a missing `statuses.ron` yields no display metadata.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load status display metadata from `statuses.ron`.
    pub fn load_definitions(&self) -> LoadResult<Vec<StatusDefinition>> {
        let path = self.data_dir.join("statuses.ron");
        if !path.exists() {
            return Ok(Vec::new());
        }
        DefinitionLoader::load(&path)
    }

    /// Builds a catalog holding every built-in status type plus the loaded
    /// display metadata.
    ///
    /// A definition for an identifier with no bound type is rejected.
    pub fn build_catalog(&self) -> LoadResult<Arc<StatusCatalog>> {
        let mut catalog = StatusCatalog::new();
        register_builtin(&mut catalog).context("registering built-in statuses")?;

        for definition in self.load_definitions()? {
            anyhow::ensure!(
                catalog.is_valid(&definition.status_id),
                "statuses.ron describes unknown status '{}'",
                definition.status_id
            );
            catalog.add_definition(definition);
        }

        tracing::info!(statuses = catalog.len(), "status catalog ready");
        Ok(Arc::new(catalog))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn empty_directory_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());

        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
        let catalog = factory.build_catalog().unwrap();
        assert_eq!(catalog.len(), 4);
        assert!(catalog.definition("burning").is_none());
    }

    #[test]
    fn definitions_attach_to_catalog() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "statuses.ron",
            r#"(statuses: [(status_id: "poisoned", display_name: "Poisoned")])"#,
        );

        let catalog = ContentFactory::new(dir.path()).build_catalog().unwrap();
        assert_eq!(
            catalog.definition("poisoned").map(|d| d.display_name.as_str()),
            Some("Poisoned")
        );
    }

    #[test]
    fn unknown_definition_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "statuses.ron",
            r#"(statuses: [(status_id: "frozen", display_name: "Frozen")])"#,
        );

        let err = ContentFactory::new(dir.path()).build_catalog().unwrap_err();
        assert!(err.to_string().contains("frozen"));
    }

    #[test]
    fn shipped_data_directory_loads() {
        let factory = ContentFactory::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"));
        let config = factory.load_config().unwrap();
        assert_eq!(config.status.max_statuses, 8);

        let catalog = factory.build_catalog().unwrap();
        for id in catalog.status_ids() {
            assert!(catalog.definition(id).is_some(), "{id} has no definition");
        }
    }
}

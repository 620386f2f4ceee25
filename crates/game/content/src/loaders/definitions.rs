//! Status display metadata loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use status_core::StatusDefinition;

use crate::loaders::{LoadResult, read_file};

/// Definition list structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinitionCatalog {
    pub statuses: Vec<StatusDefinition>,
}

/// Loader for status definitions from RON files.
pub struct DefinitionLoader;

impl DefinitionLoader {
    /// Load status definitions from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<StatusDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<StatusDefinition>> {
        let catalog: DefinitionCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse status definitions RON: {}", e))?;

        Ok(catalog.statuses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_definitions() {
        let definitions = DefinitionLoader::parse(
            r#"(
                statuses: [
                    (status_id: "burning", display_name: "Burning", icon_path: Some("icons/burning.png")),
                    (status_id: "stunned", display_name: "Stunned"),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(
            definitions,
            vec![
                StatusDefinition::new("burning", "Burning").with_icon("icons/burning.png"),
                StatusDefinition::new("stunned", "Stunned"),
            ]
        );
    }

    #[test]
    fn malformed_ron_is_an_error() {
        assert!(DefinitionLoader::parse("(statuses: [(status_id: 3)])").is_err());
    }
}

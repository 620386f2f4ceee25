//! File-based StateRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use status_core::{StreamReader, StreamWriter};

use crate::actor::ActorRecord;
use crate::repository::{RepositoryError, Result, StateRepository, validate_slot};

/// On-disk encoding of a save slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveFormat {
    /// Structured record as pretty-printed JSON.
    #[default]
    Json,
    /// Field-by-field little-endian stream.
    Binary,
}

impl SaveFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Binary => "bin",
        }
    }

    fn encode(self, record: &ActorRecord) -> Result<Vec<u8>> {
        match self {
            Self::Json => Ok(serde_json::to_vec_pretty(record)?),
            Self::Binary => {
                let mut writer = StreamWriter::new(Vec::new());
                record
                    .write_to(&mut writer)
                    .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
                Ok(writer.into_inner())
            }
        }
    }

    fn decode(self, bytes: &[u8]) -> Result<ActorRecord> {
        match self {
            Self::Json => Ok(serde_json::from_slice(bytes)?),
            Self::Binary => ActorRecord::read_from(&mut StreamReader::new(bytes))
                .map_err(|e| RepositoryError::CorruptedData(e.to_string())),
        }
    }
}

/// File-based implementation of StateRepository.
///
/// Stores one file per slot, `{slot}.json` or `{slot}.bin` depending on the
/// format. Writes go to a temp file first and are renamed into place.
pub struct FileStateRepository {
    base_dir: PathBuf,
    format: SaveFormat,
}

impl FileStateRepository {
    /// Create a new file-based state repository.
    pub fn new(base_dir: impl AsRef<Path>, format: SaveFormat) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir, format })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn format(&self) -> SaveFormat {
        self.format
    }

    /// Get the path to a slot file.
    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.base_dir
            .join(format!("{}.{}", slot, self.format.extension()))
    }
}

impl StateRepository for FileStateRepository {
    fn save(&self, slot: &str, record: &ActorRecord) -> Result<()> {
        validate_slot(slot)?;
        let path = self.slot_path(slot);
        let temp_path = path.with_extension(format!("{}.tmp", self.format.extension()));

        let bytes = self.format.encode(record)?;

        // Write to temp file
        fs::write(&temp_path, bytes)?;

        // Atomic rename
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved slot[{}] to {}", slot, path.display());

        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Option<ActorRecord>> {
        validate_slot(slot)?;
        let path = self.slot_path(slot);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        let record = self.format.decode(&bytes)?;

        tracing::debug!("Loaded slot[{}] from {}", slot, path.display());

        Ok(Some(record))
    }

    fn exists(&self, slot: &str) -> bool {
        validate_slot(slot).is_ok() && self.slot_path(slot).exists()
    }

    fn delete(&self, slot: &str) -> Result<()> {
        validate_slot(slot)?;
        let path = self.slot_path(slot);

        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Deleted slot[{}]", slot);
        }

        Ok(())
    }

    fn list_slots(&self) -> Result<Vec<String>> {
        let suffix = format!(".{}", self.format.extension());
        let mut slots = Vec::new();

        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(slot) = filename.strip_suffix(&suffix)
                && validate_slot(slot).is_ok()
            {
                slots.push(slot.to_owned());
            }
        }

        slots.sort_unstable();
        Ok(slots)
    }
}

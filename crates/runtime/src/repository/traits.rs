//! Repository contract for saving and loading actor state.

use crate::actor::ActorRecord;
use crate::repository::{RepositoryError, Result};

/// Repository for actor save records, indexed by slot name.
///
/// Slot names are non-empty and limited to ASCII letters, digits, `-` and
/// `_`, so they can double as file stems.
pub trait StateRepository: Send + Sync {
    /// Save a record, replacing any previous one in the slot.
    fn save(&self, slot: &str, record: &ActorRecord) -> Result<()>;

    /// Load the record in a slot, if one was saved.
    fn load(&self, slot: &str) -> Result<Option<ActorRecord>>;

    /// Check if a slot holds a record.
    fn exists(&self, slot: &str) -> bool;

    /// Delete a slot. Deleting an empty slot is not an error.
    fn delete(&self, slot: &str) -> Result<()>;

    /// List all occupied slots in sorted order.
    fn list_slots(&self) -> Result<Vec<String>> {
        Ok(vec![])
    }
}

/// Rejects slot names that are empty or contain path-unsafe characters.
pub fn validate_slot(slot: &str) -> Result<()> {
    let valid = !slot.is_empty()
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(RepositoryError::InvalidSlot(slot.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_names() {
        assert!(validate_slot("hero_01").is_ok());
        assert!(validate_slot("quick-save").is_ok());
        assert!(validate_slot("").is_err());
        assert!(validate_slot("../escape").is_err());
        assert!(validate_slot("with space").is_err());
    }
}

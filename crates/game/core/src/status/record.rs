//! Save/restore for [`StatusSlots`].
//!
//! # Structured form
//!
//! ```json
//! { "maxCount": 3, "status": [ { "statusId": "burning", "statusDuration": 2.5 }, null, null ] }
//! ```
//!
//! `null`, or an entry missing either field, marks an empty slot. A record
//! without a `status` list is treated as "nothing saved" and clears the engine.
//!
//! # Binary form
//!
//! ```text
//! i32  slot_count
//! per slot:
//!   bool occupied
//!   if occupied: string status_id, f32 duration
//! ```

use std::io::{Read, Write};

use crate::persistence::{PersistenceError, StreamReader, StreamWriter};
use crate::status::effect::StatusEffect;
use crate::status::slots::StatusSlots;

/// Structured save record of a slot array.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlotsRecord {
    #[serde(rename = "maxCount", default, skip_serializing_if = "Option::is_none")]
    pub max_count: Option<i32>,

    /// One entry per slot index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<Option<SlotRecord>>>,
}

/// One occupied slot.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlotRecord {
    #[serde(rename = "statusId", default)]
    pub status_id: String,

    #[serde(rename = "statusDuration", default, skip_serializing_if = "Option::is_none")]
    pub status_duration: Option<f32>,
}

impl SlotRecord {
    pub fn new(status_id: impl Into<String>, status_duration: f32) -> Self {
        Self {
            status_id: status_id.into(),
            status_duration: Some(status_duration),
        }
    }

    /// Identifier and duration of an occupied slot, or `None` when either
    /// field is missing.
    fn occupant(&self) -> Option<(&str, f32)> {
        if self.status_id.is_empty() {
            return None;
        }
        let Some(duration) = self.status_duration else {
            tracing::warn!(
                target: "status::persistence",
                status = %self.status_id,
                "slot has no duration, loading it as empty"
            );
            return None;
        };
        Some((&self.status_id, duration))
    }
}

impl SlotsRecord {
    /// Writes the binary form. A record without a status list writes zero
    /// slots.
    pub fn write_to<W: Write>(&self, writer: &mut StreamWriter<W>) -> Result<(), PersistenceError> {
        let entries = self.status.as_deref().unwrap_or_default();
        let count = i32::try_from(entries.len()).map_err(|_| {
            PersistenceError::Malformed(format!("slot count {} does not fit i32", entries.len()))
        })?;
        writer.write_i32(count)?;

        for entry in entries {
            match entry.as_ref().and_then(SlotRecord::occupant) {
                Some((status_id, duration)) => {
                    writer.write_bool(true)?;
                    writer.write_str(status_id)?;
                    writer.write_f32(duration)?;
                }
                None => writer.write_bool(false)?,
            }
        }

        Ok(())
    }

    /// Reads the binary form without validating it against any engine.
    pub fn read_from<R: Read>(reader: &mut StreamReader<R>) -> Result<Self, PersistenceError> {
        let count = read_slot_count(reader)?;

        let mut status = Vec::with_capacity(count.min(64));
        for _ in 0..count {
            status.push(read_slot(reader)?);
        }

        Ok(Self {
            max_count: i32::try_from(count).ok(),
            status: Some(status),
        })
    }
}

fn read_slot_count<R: Read>(reader: &mut StreamReader<R>) -> Result<usize, PersistenceError> {
    let count = reader.read_i32()?;
    usize::try_from(count)
        .map_err(|_| PersistenceError::Malformed(format!("negative slot count {count}")))
}

fn read_slot<R: Read>(reader: &mut StreamReader<R>) -> Result<Option<SlotRecord>, PersistenceError> {
    if !reader.read_bool()? {
        return Ok(None);
    }

    let status_id = reader.read_string()?;
    let status_duration = reader.read_f32()?;
    Ok(Some(SlotRecord::new(status_id, status_duration)))
}

impl StatusSlots {
    /// Captures every slot, in index order.
    pub fn to_record(&self) -> SlotsRecord {
        let status = (0..self.capacity())
            .map(|index| {
                self.status_at(index)
                    .map(|s| SlotRecord::new(s.identifier(), s.remaining_duration()))
            })
            .collect();

        SlotsRecord {
            max_count: i32::try_from(self.capacity()).ok(),
            status: Some(status),
        }
    }

    /// Restores slots from a structured record.
    ///
    /// Every saved unit is materialized before the live slots change, so a
    /// failing record leaves the engine untouched.
    pub fn restore_record(&mut self, record: &SlotsRecord) -> Result<(), PersistenceError> {
        let Some(entries) = &record.status else {
            tracing::warn!(target: "status::persistence", "record has no status list, clearing slots");
            self.restore_slots(Vec::new());
            return Ok(());
        };

        self.check_capacity(entries.len())?;

        let restored = entries
            .iter()
            .map(|entry| match entry.as_ref().and_then(SlotRecord::occupant) {
                Some((status_id, duration)) => self.materialize(status_id, duration).map(Some),
                None => Ok(None),
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.restore_slots(restored);
        Ok(())
    }

    /// Writes the binary form.
    pub fn write_to<W: Write>(&self, writer: &mut StreamWriter<W>) -> Result<(), PersistenceError> {
        self.to_record().write_to(writer)
    }

    /// Restores slots from the binary form.
    ///
    /// A slot count above capacity is rejected before anything is read or
    /// changed.
    pub fn read_from<R: Read>(&mut self, reader: &mut StreamReader<R>) -> Result<(), PersistenceError> {
        let count = read_slot_count(reader)?;
        self.check_capacity(count)?;

        let mut restored = Vec::with_capacity(count);
        for _ in 0..count {
            let unit = match read_slot(reader)? {
                Some(slot) => match slot.occupant() {
                    Some((status_id, duration)) => Some(self.materialize(status_id, duration)?),
                    None => None,
                },
                None => None,
            };
            restored.push(unit);
        }

        self.restore_slots(restored);
        Ok(())
    }

    fn check_capacity(&self, saved: usize) -> Result<(), PersistenceError> {
        if saved > self.capacity() {
            return Err(PersistenceError::CapacityExceeded {
                saved,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    fn materialize(
        &self,
        status_id: &str,
        duration: f32,
    ) -> Result<Box<dyn StatusEffect>, PersistenceError> {
        if !(duration >= 0.0) {
            return Err(PersistenceError::Malformed(format!(
                "status '{status_id}' has invalid duration {duration}"
            )));
        }

        Ok(self.catalog().create(status_id, duration)?)
    }
}

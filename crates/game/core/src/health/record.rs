//! Save/restore for [`HealthLedger`].
//!
//! Armor is configuration, not state, and is not saved.

use std::io::{Read, Write};

use super::HealthLedger;
use crate::persistence::{PersistenceError, StreamReader, StreamWriter};

/// Structured save record of a health ledger.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HealthRecord {
    pub health: f32,

    #[serde(rename = "maxHealth")]
    pub max_health: f32,

    #[serde(rename = "isInvulnerable")]
    pub invulnerable: bool,
}

impl HealthRecord {
    /// Checks that the record can be loaded: `maxHealth > 0` and health is a
    /// number.
    pub fn validate(&self) -> Result<(), PersistenceError> {
        if !(self.max_health > 0.0) {
            return Err(PersistenceError::Malformed(format!(
                "maxHealth must be positive (got {})",
                self.max_health
            )));
        }
        if self.health.is_nan() {
            return Err(PersistenceError::Malformed("health is NaN".into()));
        }
        Ok(())
    }

    /// Writes `f32 health, f32 maxHealth, bool isInvulnerable`.
    pub fn write_to<W: Write>(&self, writer: &mut StreamWriter<W>) -> Result<(), PersistenceError> {
        writer.write_f32(self.health)?;
        writer.write_f32(self.max_health)?;
        writer.write_bool(self.invulnerable)
    }

    pub fn read_from<R: Read>(reader: &mut StreamReader<R>) -> Result<Self, PersistenceError> {
        Ok(Self {
            health: reader.read_f32()?,
            max_health: reader.read_f32()?,
            invulnerable: reader.read_bool()?,
        })
    }
}

impl HealthLedger {
    pub fn to_record(&self) -> HealthRecord {
        HealthRecord {
            health: self.health,
            max_health: self.max_health,
            invulnerable: self.invulnerable,
        }
    }

    /// Restores state and raises a change notification.
    ///
    /// Saved health is clamped to `[0, maxHealth]`.
    pub fn restore_record(&mut self, record: &HealthRecord) -> Result<(), PersistenceError> {
        record.validate()?;

        self.max_health = record.max_health;
        self.health = record.health.clamp(0.0, record.max_health);
        self.invulnerable = record.invulnerable;
        self.emit_changed();
        Ok(())
    }

    pub fn write_to<W: Write>(&self, writer: &mut StreamWriter<W>) -> Result<(), PersistenceError> {
        self.to_record().write_to(writer)
    }

    pub fn read_from<R: Read>(&mut self, reader: &mut StreamReader<R>) -> Result<(), PersistenceError> {
        let record = HealthRecord::read_from(reader)?;
        self.restore_record(&record)
    }
}

//! Host entity owning one health ledger and one status slot engine.

use std::fmt;
use std::io::{Read, Write};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use status_core::{
    AddOutcome, Entity, EntityError, GameConfig, HealthEvent, HealthLedger, HealthRecord,
    PersistenceError, SlotsRecord, StatusCatalog, StatusEffect, StatusError, StatusEvent,
    StatusSlots, StreamReader, StreamWriter,
};

use crate::events::EventSink;

/// Identifier of an actor within a driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

/// Combined save record of one actor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActorRecord {
    pub health: HealthRecord,
    pub statuses: SlotsRecord,
}

impl ActorRecord {
    /// Writes the health block followed by the slot block.
    pub fn write_to<W: Write>(&self, writer: &mut StreamWriter<W>) -> Result<(), PersistenceError> {
        self.health.write_to(writer)?;
        self.statuses.write_to(writer)
    }

    pub fn read_from<R: Read>(reader: &mut StreamReader<R>) -> Result<Self, PersistenceError> {
        Ok(Self {
            health: HealthRecord::read_from(reader)?,
            statuses: SlotsRecord::read_from(reader)?,
        })
    }
}

/// A game entity: a health ledger with statuses attached.
///
/// Status hooks run against the actor's ledger, so effects see the same
/// health the rest of the game does.
#[derive(Debug)]
pub struct Actor {
    id: ActorId,
    name: String,
    health: HealthLedger,
    statuses: StatusSlots,
}

impl Actor {
    pub fn new(
        id: ActorId,
        name: impl Into<String>,
        catalog: Arc<StatusCatalog>,
        config: &GameConfig,
    ) -> Result<Self, EntityError> {
        let health = HealthLedger::from_config(&config.health)?;
        let statuses = StatusSlots::from_config(catalog, &config.status);
        Ok(Self::from_parts(id, name, health, statuses))
    }

    pub fn from_parts(
        id: ActorId,
        name: impl Into<String>,
        health: HealthLedger,
        statuses: StatusSlots,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            health,
            statuses,
        }
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> &HealthLedger {
        &self.health
    }

    pub fn health_mut(&mut self) -> &mut HealthLedger {
        &mut self.health
    }

    pub fn statuses(&self) -> &StatusSlots {
        &self.statuses
    }

    pub fn has_status(&self, status_id: &str) -> bool {
        self.statuses.has_status(status_id)
    }

    pub fn add_status(&mut self, status_id: &str, duration: f32) -> Result<AddOutcome, StatusError> {
        self.statuses.add_status(status_id, duration, &mut self.health)
    }

    pub fn add_effect(&mut self, status: Box<dyn StatusEffect>) -> Result<AddOutcome, StatusError> {
        self.statuses.add_effect(status, &mut self.health)
    }

    pub fn remove_status(&mut self, status_id: &str) -> Result<bool, StatusError> {
        self.statuses.remove_status(status_id, &mut self.health)
    }

    pub fn clear_statuses(&mut self) -> Result<(), StatusError> {
        self.statuses.clear_statuses(&mut self.health)
    }

    pub fn set_lock_state(&mut self, locked: bool) {
        self.statuses.set_lock_state(locked);
    }

    /// Advances every status by `delta` seconds.
    pub fn evaluate(&mut self, delta: f32) -> Result<(), StatusError> {
        self.statuses.evaluate(delta, &mut self.health)
    }

    pub fn subscribe_status(&mut self, callback: impl FnMut(&StatusEvent) + 'static) {
        self.statuses.subscribe(callback);
    }

    pub fn subscribe_health(&mut self, callback: impl FnMut(&HealthEvent) + 'static) {
        self.health.subscribe(callback);
    }

    /// Forwards both notification streams into `sink`.
    pub fn forward_events(&mut self, sink: EventSink) {
        let status_sink = sink.clone();
        self.subscribe_status(move |event| status_sink.send_status(event));
        self.subscribe_health(move |event| sink.send_health(event));
    }

    pub fn to_record(&self) -> ActorRecord {
        ActorRecord {
            health: self.health.to_record(),
            statuses: self.statuses.to_record(),
        }
    }

    /// Restores both components. On error neither is changed.
    pub fn restore_record(&mut self, record: &ActorRecord) -> Result<(), PersistenceError> {
        record.health.validate()?;
        self.statuses.restore_record(&record.statuses)?;
        self.health.restore_record(&record.health)
    }

    pub fn write_to<W: Write>(&self, writer: &mut StreamWriter<W>) -> Result<(), PersistenceError> {
        self.health.write_to(writer)?;
        self.statuses.write_to(writer)
    }

    /// Reads the binary form written by [`write_to`](Self::write_to). On
    /// error neither component is changed.
    pub fn read_from<R: Read>(&mut self, reader: &mut StreamReader<R>) -> Result<(), PersistenceError> {
        let health = HealthRecord::read_from(reader)?;
        health.validate()?;
        self.statuses.read_from(reader)?;
        self.health.restore_record(&health)
    }
}

impl Entity for Actor {
    fn take_damage(&mut self, amount: f32, multiplier: f32) -> Result<f32, EntityError> {
        self.health.take_damage(amount, multiplier)
    }

    fn take_fixed_damage(&mut self, amount: f32) -> Result<f32, EntityError> {
        self.health.take_fixed_damage(amount)
    }

    fn restore_health(&mut self, amount: f32) -> Result<f32, EntityError> {
        self.health.restore_health(amount, false)
    }

    fn is_alive(&self) -> bool {
        self.health.is_alive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Arc<StatusCatalog> {
        let mut catalog = StatusCatalog::new();
        status_content::register_builtin(&mut catalog).unwrap();
        Arc::new(catalog)
    }

    fn actor() -> Actor {
        Actor::new(ActorId(1), "ogre", catalog(), &GameConfig::default()).unwrap()
    }

    #[test]
    fn statuses_act_on_own_ledger() {
        let mut ogre = actor();
        ogre.add_status("burning", 3.0).unwrap();

        ogre.evaluate(1.0).unwrap();
        assert_eq!(ogre.health().health(), 95.0);
        assert!(ogre.has_status("burning"));
    }

    #[test]
    fn external_damage_goes_through_entity_contract() {
        let mut ogre = actor();
        let dealt = Entity::take_damage(&mut ogre, 30.0, 2.0).unwrap();

        assert_eq!(dealt, 60.0);
        assert_eq!(ogre.health().health(), 40.0);
        assert!(Entity::is_alive(&ogre));
    }

    #[test]
    fn failed_restore_changes_nothing() {
        let mut ogre = actor();
        ogre.add_status("poisoned", 4.0).unwrap();
        let before = ogre.to_record();

        let mut bad = before.clone();
        bad.health.max_health = -1.0;
        assert!(ogre.restore_record(&bad).is_err());
        assert_eq!(ogre.to_record(), before);

        let mut unknown = before.clone();
        unknown.statuses.status = Some(vec![Some(status_core::SlotRecord::new("frozen", 1.0))]);
        assert!(ogre.restore_record(&unknown).is_err());
        assert_eq!(ogre.to_record(), before);
    }

    #[test]
    fn binary_form_matches_record_codec() {
        let mut ogre = actor();
        ogre.add_status("stunned", 2.0).unwrap();
        ogre.health_mut().take_fixed_damage(10.0).unwrap();

        let mut writer = StreamWriter::new(Vec::new());
        ogre.write_to(&mut writer).unwrap();
        let bytes = writer.into_inner();

        let record = ActorRecord::read_from(&mut StreamReader::new(bytes.as_slice())).unwrap();
        assert_eq!(record, ogre.to_record());

        let mut copy = actor();
        copy.read_from(&mut StreamReader::new(bytes.as_slice()))
            .unwrap();
        assert_eq!(copy.to_record(), ogre.to_record());
    }
}

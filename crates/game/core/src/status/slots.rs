//! Fixed-capacity status slot engine.
//!
//! A [`StatusSlots`] owns an array of optional effect units for one entity.
//! Slot indices are part of the public contract: callers address statuses by
//! index and saves record them by index, so slots are never compacted or
//! reordered. An occupied slot only changes identity by becoming empty first.
//!
//! # Add policy
//!
//! ```text
//! locked                         -> AddOutcome::Locked   (no change)
//! same id present, old >= new    -> AddOutcome::Kept     (no change)
//! same id present, old <  new    -> AddOutcome::Refreshed (replaced in place, no on_added)
//! first free slot in index order -> AddOutcome::Added    (on_added, StatusEvent::Added)
//! no free slot                   -> AddOutcome::Full     (dropped)
//! ```
//!
//! # Hooks
//!
//! Hooks receive the host entity only. A hook error aborts the running
//! operation and is returned as [`StatusError::Hook`]; slots already processed
//! in the same pass keep their new state. A unit whose `on_added` fails is
//! taken back out of its slot, so no `Added` event is ever missing for an
//! occupied slot.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::StatusConfig;
use crate::entity::{Entity, EntityError};
use crate::error::{ErrorSeverity, GameError};
use crate::event::Listeners;
use crate::status::catalog::{CatalogError, StatusCatalog};
use crate::status::effect::StatusEffect;
use crate::status::event::StatusEvent;

type Slot = Option<Box<dyn StatusEffect>>;

/// What an add request did. None of these are errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// The status took the free slot at `slot`.
    Added { slot: usize },

    /// An existing status at `slot` was replaced by a longer one.
    Refreshed { slot: usize },

    /// An existing status at `slot` lasts at least as long; the new one was discarded.
    Kept { slot: usize },

    /// The engine is locked against additions.
    Locked,

    /// Every slot is occupied; the new status was dropped.
    Full,
}

impl AddOutcome {
    /// Slot the request resolved to, if any.
    pub const fn slot(&self) -> Option<usize> {
        match self {
            Self::Added { slot } | Self::Refreshed { slot } | Self::Kept { slot } => Some(*slot),
            Self::Locked | Self::Full => None,
        }
    }

    /// True if the request changed the slot array.
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Added { .. } | Self::Refreshed { .. })
    }
}

/// Errors surfaced by slot engine operations.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum StatusError {
    /// The identifier could not be materialized by the catalog.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A lifecycle hook failed.
    #[error("status '{status}' hook failed: {source}")]
    Hook {
        status: String,
        #[source]
        source: EntityError,
    },
}

impl StatusError {
    fn hook(status: &str, source: EntityError) -> Self {
        Self::Hook {
            status: status.to_owned(),
            source,
        }
    }
}

impl GameError for StatusError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Catalog(err) => err.severity(),
            Self::Hook { source, .. } => source.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Catalog(err) => err.error_code(),
            Self::Hook { .. } => "STATUS_HOOK_FAILED",
        }
    }
}

/// Bounded, index-addressed collection of active statuses for one entity.
#[derive(Debug)]
pub struct StatusSlots {
    slots: Box<[Slot]>,
    catalog: Arc<StatusCatalog>,
    locked: bool,
    listeners: Listeners<StatusEvent>,
}

impl StatusSlots {
    /// Creates an engine with `capacity` empty slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(catalog: Arc<StatusCatalog>, capacity: usize) -> Self {
        assert!(capacity > 0, "status slot capacity must be positive");

        Self {
            slots: (0..capacity).map(|_| None).collect(),
            catalog,
            locked: false,
            listeners: Listeners::new(),
        }
    }

    pub fn from_config(catalog: Arc<StatusCatalog>, config: &StatusConfig) -> Self {
        Self::new(catalog, config.max_statuses)
    }

    /// Registers a notification callback.
    pub fn subscribe(&mut self, callback: impl FnMut(&StatusEvent) + 'static) {
        self.listeners.subscribe(callback);
    }

    pub fn catalog(&self) -> &Arc<StatusCatalog> {
        &self.catalog
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Sets whether new statuses are rejected. Existing slots are untouched.
    pub fn set_lock_state(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Returns the status at `index`. Out-of-range indices yield `None`.
    pub fn status_at(&self, index: usize) -> Option<&dyn StatusEffect> {
        self.slots.get(index)?.as_deref()
    }

    pub fn has_status(&self, status_id: &str) -> bool {
        self.position(status_id).is_some()
    }

    /// Index of the slot holding `status_id`.
    pub fn position(&self, status_id: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|s| s.identifier() == status_id))
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Occupied slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &dyn StatusEffect)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| Some((index, slot.as_deref()?)))
    }

    /// Materializes `status_id` through the catalog and adds it.
    ///
    /// Catalog failures surface even while locked, since they indicate bad
    /// content rather than a runtime condition.
    pub fn add_status(
        &mut self,
        status_id: &str,
        duration: f32,
        entity: &mut dyn Entity,
    ) -> Result<AddOutcome, StatusError> {
        let status = self.catalog.create(status_id, duration)?;
        self.add_effect(status, entity)
    }

    /// Adds an already constructed status unit.
    pub fn add_effect(
        &mut self,
        status: Box<dyn StatusEffect>,
        entity: &mut dyn Entity,
    ) -> Result<AddOutcome, StatusError> {
        if self.locked {
            debug!(target: "status::slots", status = status.identifier(), "rejected: locked");
            return Ok(AddOutcome::Locked);
        }

        let mut free = None;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let Some(existing) = slot else {
                free.get_or_insert(index);
                continue;
            };

            if existing.identifier() != status.identifier() {
                continue;
            }

            if existing.remaining_duration() >= status.remaining_duration() {
                debug!(
                    target: "status::slots",
                    status = status.identifier(),
                    slot = index,
                    kept = existing.remaining_duration(),
                    "kept existing status"
                );
                return Ok(AddOutcome::Kept { slot: index });
            }

            debug!(
                target: "status::slots",
                status = status.identifier(),
                slot = index,
                duration = status.remaining_duration(),
                "refreshed status"
            );
            *slot = Some(status);
            return Ok(AddOutcome::Refreshed { slot: index });
        }

        let Some(index) = free else {
            debug!(target: "status::slots", status = status.identifier(), "dropped: no free slot");
            return Ok(AddOutcome::Full);
        };

        let id = status.identifier().to_owned();
        let status = self.slots[index].insert(status);
        if let Err(source) = status.on_added(entity) {
            self.slots[index] = None;
            return Err(StatusError::hook(&id, source));
        }

        debug!(target: "status::slots", status = %id, slot = index, "added status");
        self.listeners.emit(StatusEvent::Added { id });
        Ok(AddOutcome::Added { slot: index })
    }

    /// Removes the first slot holding `status_id`.
    ///
    /// Returns `Ok(false)` if no slot matched.
    pub fn remove_status(
        &mut self,
        status_id: &str,
        entity: &mut dyn Entity,
    ) -> Result<bool, StatusError> {
        let Some(index) = self.position(status_id) else {
            return Ok(false);
        };

        self.vacate(index, entity)?;
        Ok(true)
    }

    /// Removes every status, in index order.
    pub fn clear_statuses(&mut self, entity: &mut dyn Entity) -> Result<(), StatusError> {
        for index in 0..self.slots.len() {
            self.vacate(index, entity)?;
        }
        Ok(())
    }

    /// Advances every occupied slot by `delta` seconds, in index order.
    ///
    /// Inactive statuses are removed instead of ticked. Active ones have
    /// their remaining duration lowered (floored at zero) before their tick
    /// hook runs. A negative `delta` is treated as zero.
    pub fn evaluate(&mut self, delta: f32, entity: &mut dyn Entity) -> Result<(), StatusError> {
        let delta = delta.max(0.0);

        for index in 0..self.slots.len() {
            let Some(status) = self.slots[index].as_mut() else {
                continue;
            };

            if !status.is_active(&*entity) {
                debug!(target: "status::slots", status = status.identifier(), slot = index, "expired");
                self.vacate(index, entity)?;
                continue;
            }

            let remaining = (status.remaining_duration() - delta).max(0.0);
            status.set_duration(remaining);
            status
                .on_tick(entity, delta)
                .map_err(|source| StatusError::hook(status.identifier(), source))?;

            let id = status.identifier().to_owned();
            let remaining = status.remaining_duration();
            trace!(target: "status::slots", status = %id, slot = index, remaining, "ticked");
            self.listeners.emit(StatusEvent::Ticked { id, remaining });
        }

        Ok(())
    }

    /// Empties `index`, running the removal hook and notification.
    fn vacate(&mut self, index: usize, entity: &mut dyn Entity) -> Result<(), StatusError> {
        let Some(mut status) = self.slots[index].take() else {
            return Ok(());
        };

        // Capture the id before the unit is dropped.
        let id = status.identifier().to_owned();
        status
            .on_removed(entity)
            .map_err(|source| StatusError::hook(&id, source))?;

        debug!(target: "status::slots", status = %id, slot = index, "removed status");
        self.listeners.emit(StatusEvent::Removed { id });
        Ok(())
    }

    /// Replaces the whole slot array with restored units.
    ///
    /// Prior occupants are announced as removed and restored units as added,
    /// but no lifecycle hook runs: a load restores state, it does not
    /// re-apply game logic. Also clears the lock.
    pub(crate) fn restore_slots(&mut self, restored: Vec<Slot>) {
        debug_assert!(restored.len() <= self.slots.len());

        for slot in self.slots.iter_mut() {
            if let Some(prior) = slot.take() {
                self.listeners.emit(StatusEvent::Removed {
                    id: prior.identifier().to_owned(),
                });
            }
        }

        self.locked = false;

        for (index, status) in restored.into_iter().enumerate() {
            let Some(status) = status else {
                continue;
            };

            let id = status.identifier().to_owned();
            self.slots[index] = Some(status);
            self.listeners.emit(StatusEvent::Added { id });
        }

        debug!(target: "status::slots", occupied = self.occupied_count(), "restored slots");
    }
}

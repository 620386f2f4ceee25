//! The effect unit contract implemented by every status type.

use core::fmt;

use crate::entity::{Entity, EntityError};

/// Remaining duration at or below which an effect is no longer active.
///
/// Not exactly zero so that floating-point countdown noise does not keep an
/// effect alive for an extra frame.
pub const ACTIVE_THRESHOLD: f32 = 0.01;

/// One instance of a status effect attached to an entity.
///
/// The slot engine owns the countdown: it lowers the remaining duration
/// through [`set_duration`](StatusEffect::set_duration) before every
/// [`on_tick`](StatusEffect::on_tick). Implementations only keep the value.
///
/// Hooks get the host entity and nothing else. They cannot reach the slot
/// engine that is driving them, so adding or removing statuses from inside a
/// hook is impossible by construction.
pub trait StatusEffect: fmt::Debug {
    /// Stable identifier, never changes after construction.
    fn identifier(&self) -> &str;

    fn remaining_duration(&self) -> f32;

    fn set_duration(&mut self, duration: f32);

    /// Whether the effect should keep ticking.
    ///
    /// The default is purely timer driven. Override to also expire on entity
    /// state (for example when the host dies).
    fn is_active(&self, _entity: &dyn Entity) -> bool {
        self.remaining_duration() > ACTIVE_THRESHOLD
    }

    /// Called once when the effect first occupies a slot. Not called on
    /// refresh or when restoring from a save.
    fn on_added(&mut self, _entity: &mut dyn Entity) -> Result<(), EntityError> {
        Ok(())
    }

    /// Called once when the effect leaves its slot (expiry or removal).
    fn on_removed(&mut self, _entity: &mut dyn Entity) -> Result<(), EntityError> {
        Ok(())
    }

    /// Called every evaluation after the duration was lowered by `delta`.
    fn on_tick(&mut self, _entity: &mut dyn Entity, _delta: f32) -> Result<(), EntityError> {
        Ok(())
    }
}

/// A status type that can be registered in the catalog by type.
///
/// The `Default` value is the "default-configured" unit the catalog hands
/// out; the catalog then sets the requested duration on it.
pub trait BoundStatus: StatusEffect + Default + 'static {
    /// Identifier this type is bound to.
    const STATUS_ID: &'static str;
}

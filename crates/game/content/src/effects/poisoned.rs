use status_core::{BoundStatus, Entity, EntityError, StatusEffect};

use super::timer_accessors;

/// Damage over time routed through the host's damage formula.
#[derive(Clone, Debug, Default)]
pub struct Poisoned {
    remaining: f32,
}

impl Poisoned {
    pub const DAMAGE_PER_SECOND: f32 = 3.0;
}

impl StatusEffect for Poisoned {
    timer_accessors!();

    fn on_tick(&mut self, entity: &mut dyn Entity, delta: f32) -> Result<(), EntityError> {
        entity.take_damage(Self::DAMAGE_PER_SECOND * delta, 1.0)?;
        Ok(())
    }
}

impl BoundStatus for Poisoned {
    const STATUS_ID: &'static str = "poisoned";
}

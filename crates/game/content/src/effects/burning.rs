use status_core::{BoundStatus, Entity, EntityError, StatusEffect};

use super::timer_accessors;

/// Fixed damage over time. Ignores the damage formula and armor.
#[derive(Clone, Debug, Default)]
pub struct Burning {
    remaining: f32,
}

impl Burning {
    pub const DAMAGE_PER_SECOND: f32 = 5.0;
}

impl StatusEffect for Burning {
    timer_accessors!();

    fn on_tick(&mut self, entity: &mut dyn Entity, delta: f32) -> Result<(), EntityError> {
        entity.take_fixed_damage(Self::DAMAGE_PER_SECOND * delta)?;
        Ok(())
    }
}

impl BoundStatus for Burning {
    const STATUS_ID: &'static str = "burning";
}

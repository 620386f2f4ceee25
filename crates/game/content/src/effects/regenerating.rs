use status_core::{ACTIVE_THRESHOLD, BoundStatus, Entity, EntityError, StatusEffect};

use super::timer_accessors;

/// Heals over time. Ends early if the host dies.
#[derive(Clone, Debug, Default)]
pub struct Regenerating {
    remaining: f32,
}

impl Regenerating {
    pub const HEALTH_PER_SECOND: f32 = 4.0;
}

impl StatusEffect for Regenerating {
    timer_accessors!();

    fn is_active(&self, entity: &dyn Entity) -> bool {
        self.remaining > ACTIVE_THRESHOLD && entity.is_alive()
    }

    fn on_tick(&mut self, entity: &mut dyn Entity, delta: f32) -> Result<(), EntityError> {
        entity.restore_health(Self::HEALTH_PER_SECOND * delta)?;
        Ok(())
    }
}

impl BoundStatus for Regenerating {
    const STATUS_ID: &'static str = "regenerating";
}

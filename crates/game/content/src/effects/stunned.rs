use status_core::{BoundStatus, StatusEffect};

use super::timer_accessors;

/// Pure marker. Hosts query it with `has_status` to skip their turn logic.
#[derive(Clone, Debug, Default)]
pub struct Stunned {
    remaining: f32,
}

impl StatusEffect for Stunned {
    timer_accessors!();
}

impl BoundStatus for Stunned {
    const STATUS_ID: &'static str = "stunned";
}

//! Built-in status types.
//!
//! Each type is bound by identifier through [`register_builtin`]. Damage and
//! healing rates are per second and scaled by the evaluation step.

mod burning;
mod poisoned;
mod regenerating;
mod stunned;

pub use burning::Burning;
pub use poisoned::Poisoned;
pub use regenerating::Regenerating;
pub use stunned::Stunned;

use status_core::{CatalogError, StatusCatalog};

/// Implements the timer half of [`StatusEffect`](status_core::StatusEffect)
/// for a type with a `remaining: f32` field.
macro_rules! timer_accessors {
    () => {
        fn identifier(&self) -> &str {
            <Self as status_core::BoundStatus>::STATUS_ID
        }

        fn remaining_duration(&self) -> f32 {
            self.remaining
        }

        fn set_duration(&mut self, duration: f32) {
            self.remaining = duration;
        }
    };
}
pub(crate) use timer_accessors;

/// Binds every built-in status type into `catalog`.
pub fn register_builtin(catalog: &mut StatusCatalog) -> Result<(), CatalogError> {
    catalog.bind::<Burning>()?;
    catalog.bind::<Poisoned>()?;
    catalog.bind::<Regenerating>()?;
    catalog.bind::<Stunned>()?;
    Ok(())
}

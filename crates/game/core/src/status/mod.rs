//! Status effects: the effect unit contract, the catalog that creates units
//! by identifier, and the slot engine that runs them for one entity.

mod catalog;
mod effect;
mod event;
mod record;
mod slots;

pub use catalog::{CatalogError, StatusCatalog, StatusDefinition, StatusFactory};
pub use effect::{ACTIVE_THRESHOLD, BoundStatus, StatusEffect};
pub use event::StatusEvent;
pub use record::{SlotRecord, SlotsRecord};
pub use slots::{AddOutcome, StatusError, StatusSlots};

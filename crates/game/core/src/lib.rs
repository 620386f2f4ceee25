//! Status-effect slots and health bookkeeping for game entities.
//!
//! `status-core` holds the rules and no I/O: the [`status`] slot engine and
//! catalog, the [`health`] ledger, the [`entity`] contract both attach to,
//! and the save/restore forms in [`persistence`]. Content definitions live in
//! `status-content`; the frame loop and repositories live in `status-runtime`.
pub mod config;
pub mod entity;
pub mod error;
pub mod event;
pub mod health;
pub mod persistence;
pub mod status;

pub use config::{DamageFormulaKind, GameConfig, HealthConfig, RuntimeConfig, StatusConfig};
pub use entity::{Entity, EntityError};
pub use error::{ErrorSeverity, GameError};
pub use event::Listeners;
pub use health::{
    ALIVE_THRESHOLD, ArmorMitigation, DamageFormula, Defense, HealthEvent, HealthLedger,
    HealthRecord, ScaledDamage,
};
pub use persistence::{MAX_STRING_LEN, PersistenceError, StreamReader, StreamWriter};
pub use status::{
    ACTIVE_THRESHOLD, AddOutcome, BoundStatus, CatalogError, SlotRecord, SlotsRecord,
    StatusCatalog, StatusDefinition, StatusError, StatusEffect, StatusEvent, StatusFactory,
    StatusSlots,
};

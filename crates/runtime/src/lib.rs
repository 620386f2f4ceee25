//! Runtime orchestration for status simulation.
//!
//! This crate hosts the pieces that sit around the pure rules in
//! `status-core`:
//! - [`actor`] pairs a health ledger with a status slot engine
//! - [`driver`] advances every actor in fixed steps and collects events
//! - [`repository`] stores actor save records in memory or on disk
//! - [`logging`] installs the tracing subscriber used by binaries
pub mod actor;
pub mod driver;
pub mod error;
pub mod events;
pub mod logging;
pub mod repository;

pub use actor::{Actor, ActorId, ActorRecord};
pub use driver::FrameDriver;
pub use error::{Result, RuntimeError};
pub use events::{ActorEvent, ActorEventKind, EventSink};
pub use logging::{LogOptions, init_logging};
pub use repository::{
    FileStateRepository, InMemoryStateRepo, RepositoryError, SaveFormat, StateRepository,
};

//! Data-driven status content.
//!
//! This crate houses the built-in status types and loaders for RON/TOML data
//! files:
//! - Status display metadata (`statuses.ron`)
//! - Slot, health and frame configuration (`config.toml`)
//!
//! Content is consumed when building a [`StatusCatalog`](status_core::StatusCatalog)
//! and never appears in saved state.

pub mod effects;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use effects::{Burning, Poisoned, Regenerating, Stunned, register_builtin};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, DefinitionLoader, LoadResult};

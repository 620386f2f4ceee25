//! Named registry of status types.
//!
//! The catalog binds identifiers to factories once, before any entity asks
//! for an effect. There is no discovery at runtime: every status module
//! registers its types explicitly, usually via [`StatusCatalog::bind`].

use std::collections::HashMap;

use crate::error::{ErrorSeverity, GameError};
use crate::status::effect::{BoundStatus, StatusEffect};

/// Produces a default-configured effect unit.
pub type StatusFactory = fn() -> Box<dyn StatusEffect>;

/// Display metadata for a status. Has no influence on the slot engine.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatusDefinition {
    pub status_id: String,
    pub display_name: String,
    #[serde(default)]
    pub icon_path: Option<String>,
}

impl StatusDefinition {
    pub fn new(status_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            status_id: status_id.into(),
            display_name: display_name.into(),
            icon_path: None,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon_path: impl Into<String>) -> Self {
        self.icon_path = Some(icon_path.into());
        self
    }
}

/// Errors raised while registering or materializing statuses.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// No factory is bound to the identifier.
    #[error("status type '{0}' is not bound to any implementation")]
    UnknownStatus(String),

    /// The bound factory produced a unit that reports a different identifier.
    #[error("status type '{bound}' is bound to an implementation reporting '{produced}'")]
    BindingMismatch { bound: String, produced: String },

    /// The identifier was bound twice.
    #[error("status type '{0}' is already bound")]
    DuplicateBinding(String),
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Content
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownStatus(_) => "CATALOG_UNKNOWN_STATUS",
            Self::BindingMismatch { .. } => "CATALOG_BINDING_MISMATCH",
            Self::DuplicateBinding(_) => "CATALOG_DUPLICATE_BINDING",
        }
    }
}

fn make_default<T: BoundStatus>() -> Box<dyn StatusEffect> {
    Box::new(T::default())
}

/// Registry mapping status identifiers to factories and display metadata.
///
/// Build it once at startup and share it between entities behind an `Arc`.
#[derive(Default)]
pub struct StatusCatalog {
    bindings: HashMap<String, StatusFactory>,
    definitions: HashMap<String, StatusDefinition>,
}

impl StatusCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `T::STATUS_ID` to `T::default()`.
    pub fn bind<T: BoundStatus>(&mut self) -> Result<(), CatalogError> {
        self.bind_factory(T::STATUS_ID, make_default::<T>)
    }

    /// Binds an identifier to a hand-written factory.
    pub fn bind_factory(
        &mut self,
        status_id: impl Into<String>,
        factory: StatusFactory,
    ) -> Result<(), CatalogError> {
        let status_id = status_id.into();
        if self.bindings.contains_key(&status_id) {
            return Err(CatalogError::DuplicateBinding(status_id));
        }

        tracing::debug!(target: "status::catalog", status = %status_id, "bound status type");
        self.bindings.insert(status_id, factory);
        Ok(())
    }

    /// Adds or replaces display metadata for a status.
    pub fn add_definition(&mut self, definition: StatusDefinition) {
        self.definitions
            .insert(definition.status_id.clone(), definition);
    }

    /// Returns true if the identifier is bound to an implementation.
    pub fn is_valid(&self, status_id: &str) -> bool {
        self.bindings.contains_key(status_id)
    }

    /// Creates a new effect unit with the given remaining duration.
    pub fn create(
        &self,
        status_id: &str,
        duration: f32,
    ) -> Result<Box<dyn StatusEffect>, CatalogError> {
        let factory = self
            .bindings
            .get(status_id)
            .ok_or_else(|| CatalogError::UnknownStatus(status_id.to_owned()))?;

        let mut status = factory();
        if status.identifier() != status_id {
            return Err(CatalogError::BindingMismatch {
                bound: status_id.to_owned(),
                produced: status.identifier().to_owned(),
            });
        }

        status.set_duration(duration);
        Ok(status)
    }

    /// Returns the display metadata for a status, if any was registered.
    pub fn definition(&self, status_id: &str) -> Option<&StatusDefinition> {
        self.definitions.get(status_id)
    }

    /// Returns all bound identifiers in sorted order.
    pub fn status_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl core::fmt::Debug for StatusCatalog {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StatusCatalog")
            .field("bindings", &self.status_ids())
            .field("definitions", &self.definitions.len())
            .finish()
    }
}

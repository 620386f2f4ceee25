//! Common error infrastructure for status-core.
//!
//! Concern-specific errors (`CatalogError`, `StatusError`, `EntityError`,
//! `PersistenceError`) live beside the code that raises them. They all
//! implement [`GameError`] so callers can classify failures uniformly.
//!
//! Conditions that are defined as silent (a full slot bar, a locked bar) are
//! not errors at all; they surface as [`AddOutcome`](crate::status::AddOutcome)
//! values instead.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: invalid input from the caller, reject without retry
/// - **Content**: a data/content bug (unknown identifier, bad binding)
/// - **Fatal**: a contract violation that leaves no sensible way to continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorSeverity {
    /// Invalid input, such as a negative damage amount.
    Validation,

    /// Content or data error, such as an identifier missing from the catalog.
    Content,

    /// Contract violation, such as a save record larger than the slot array.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Content => "content",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates a bug in data or code rather than
    /// bad caller input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Content | Self::Fatal)
    }
}

/// Common trait for all status-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who has to fix the problem, not on impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

//! Save/restore support shared by the slot engine and the health ledger.
//!
//! Both components support two equivalent forms:
//!
//! - a **structured** record (`serde` types with stable camelCase keys) that
//!   any serde format can carry, and
//! - a **binary stream** written field by field through [`StreamWriter`] and
//!   read back through [`StreamReader`].
//!
//! Both forms encode slot position by list or stream order.

mod stream;

pub use stream::{MAX_STRING_LEN, StreamReader, StreamWriter};

use crate::error::{ErrorSeverity, GameError};
use crate::status::CatalogError;

/// Errors raised while saving or restoring component state.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PersistenceError {
    /// The record holds more slots than the engine it is loaded into.
    #[error("record holds {saved} slots but capacity is {capacity}")]
    CapacityExceeded { saved: usize, capacity: usize },

    /// A field holds a value the component cannot accept.
    #[error("malformed record: {0}")]
    Malformed(String),

    /// The binary stream could not be encoded or decoded.
    #[error("binary stream error: {0}")]
    Codec(String),

    /// The underlying reader or writer failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// A saved identifier is not bound in the catalog.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl GameError for PersistenceError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::CapacityExceeded { .. } => ErrorSeverity::Fatal,
            Self::Malformed(_) | Self::Codec(_) => ErrorSeverity::Validation,
            Self::Io(_) => ErrorSeverity::Fatal,
            Self::Catalog(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CapacityExceeded { .. } => "PERSISTENCE_CAPACITY_EXCEEDED",
            Self::Malformed(_) => "PERSISTENCE_MALFORMED",
            Self::Codec(_) => "PERSISTENCE_CODEC",
            Self::Io(_) => "PERSISTENCE_IO",
            Self::Catalog(err) => err.error_code(),
        }
    }
}

impl From<bincode::Error> for PersistenceError {
    fn from(err: bincode::Error) -> Self {
        match *err {
            bincode::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::UnexpectedEof => {
                Self::Codec(format!("truncated stream: {io}"))
            }
            bincode::ErrorKind::Io(io) => Self::Io(io.to_string()),
            other => Self::Codec(other.to_string()),
        }
    }
}

//! Error types surfaced by the runtime.

use status_core::{EntityError, ErrorSeverity, GameError, PersistenceError, StatusError};
use thiserror::Error;

use crate::actor::ActorId;
use crate::repository::RepositoryError;

/// Errors surfaced by the frame driver and actor helpers.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("unknown actor {0}")]
    UnknownActor(ActorId),

    #[error("actor {0} is already registered")]
    DuplicateActor(ActorId),

    #[error("invalid runtime configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to initialize logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Status(#[from] StatusError),

    #[error(transparent)]
    Entity(#[from] EntityError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownActor(_) | Self::DuplicateActor(_) => ErrorSeverity::Validation,
            Self::InvalidConfig(_) => ErrorSeverity::Content,
            Self::Logging(_) | Self::Repository(_) => ErrorSeverity::Fatal,
            Self::Status(err) => err.severity(),
            Self::Entity(err) => err.severity(),
            Self::Persistence(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownActor(_) => "RUNTIME_UNKNOWN_ACTOR",
            Self::DuplicateActor(_) => "RUNTIME_DUPLICATE_ACTOR",
            Self::InvalidConfig(_) => "RUNTIME_INVALID_CONFIG",
            Self::Logging(_) => "RUNTIME_LOGGING",
            Self::Repository(_) => "RUNTIME_REPOSITORY",
            Self::Status(err) => err.error_code(),
            Self::Entity(err) => err.error_code(),
            Self::Persistence(err) => err.error_code(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;

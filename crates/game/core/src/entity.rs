//! Host entity contract.
//!
//! The slot engine and the health ledger attach to an entity but never own
//! it. Status hooks receive the entity as `&mut dyn Entity` and may only act
//! on it through this contract.

use crate::error::{ErrorSeverity, GameError};

/// An object that can take damage and be healed.
///
/// All amounts must be non-negative. A negative amount is a caller bug and is
/// reported as [`EntityError::NegativeAmount`] instead of being clamped.
pub trait Entity {
    /// Applies damage through the entity's damage formula.
    ///
    /// Returns the damage actually applied after the formula ran.
    fn take_damage(&mut self, amount: f32, multiplier: f32) -> Result<f32, EntityError>;

    /// Applies damage that bypasses the damage formula.
    fn take_fixed_damage(&mut self, amount: f32) -> Result<f32, EntityError>;

    /// Restores health, returning the amount actually restored.
    fn restore_health(&mut self, amount: f32) -> Result<f32, EntityError>;

    /// Whether the entity is still alive. Effects may use this to expire early.
    fn is_alive(&self) -> bool {
        true
    }
}

/// Invariant violations raised by the entity contract.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EntityError {
    /// A damage or heal amount was negative.
    #[error("{operation}: attempted to use negative amount {amount} in an unsigned operation")]
    NegativeAmount {
        /// Operation that rejected the amount.
        operation: &'static str,
        /// The rejected amount.
        amount: f32,
    },

    /// Maximum health must be strictly positive.
    #[error("maximum health must be positive (got {0})")]
    InvalidMaxHealth(f32),
}

impl EntityError {
    /// Rejects negative (and NaN) amounts for `operation`.
    pub(crate) fn check_amount(operation: &'static str, amount: f32) -> Result<(), Self> {
        if amount >= 0.0 {
            Ok(())
        } else {
            Err(Self::NegativeAmount { operation, amount })
        }
    }
}

impl GameError for EntityError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeAmount { .. } => "ENTITY_NEGATIVE_AMOUNT",
            Self::InvalidMaxHealth(_) => "ENTITY_INVALID_MAX_HEALTH",
        }
    }
}

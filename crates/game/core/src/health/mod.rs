//! Health ledger: current/maximum health and invulnerability for one entity.
//!
//! Health is clamped to `[0, max_health]` after every mutation. Changing the
//! maximum keeps the health *fraction*, not the absolute value.

mod formula;
mod record;

pub use formula::{ArmorMitigation, DamageFormula, Defense, ScaledDamage};
pub use record::HealthRecord;

use tracing::debug;

use crate::config::HealthConfig;
use crate::entity::{Entity, EntityError};
use crate::event::Listeners;

/// Health above which an entity counts as alive.
pub const ALIVE_THRESHOLD: f32 = 0.001;

/// Notifications raised by the health ledger.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum HealthEvent {
    /// Health changed and the entity is still alive.
    Changed { health: f32, fraction: f32 },

    /// Damage brought health to zero. Raised instead of `Changed`.
    Death,
}

/// Current and maximum health of an entity.
#[derive(Debug)]
pub struct HealthLedger {
    health: f32,
    max_health: f32,
    invulnerable: bool,
    defense: Defense,
    formula: Box<dyn DamageFormula>,
    listeners: Listeners<HealthEvent>,
}

impl HealthLedger {
    /// Creates a ledger at full health using [`ScaledDamage`].
    pub fn new(max_health: f32) -> Result<Self, EntityError> {
        check_max_health(max_health)?;

        Ok(Self {
            health: max_health,
            max_health,
            invulnerable: false,
            defense: Defense::NONE,
            formula: Box::new(ScaledDamage),
            listeners: Listeners::new(),
        })
    }

    pub fn from_config(config: &HealthConfig) -> Result<Self, EntityError> {
        let mut ledger = Self::new(config.max_health)?;
        ledger.invulnerable = config.invulnerable;
        ledger.defense = Defense::new(config.armor, config.bonus_armor);
        ledger.formula = config.formula.build();
        Ok(ledger)
    }

    /// Replaces the damage formula (builder pattern).
    #[must_use]
    pub fn with_formula(mut self, formula: impl DamageFormula + 'static) -> Self {
        self.formula = Box::new(formula);
        self
    }

    /// Registers a notification callback.
    pub fn subscribe(&mut self, callback: impl FnMut(&HealthEvent) + 'static) {
        self.listeners.subscribe(callback);
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn max_health(&self) -> f32 {
        self.max_health
    }

    /// Remaining health as a fraction in `[0, 1]`.
    pub fn health_fraction(&self) -> f32 {
        self.health / self.max_health
    }

    pub fn is_alive(&self) -> bool {
        self.health > ALIVE_THRESHOLD
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable
    }

    pub fn set_invulnerable(&mut self, invulnerable: bool) {
        self.invulnerable = invulnerable;
    }

    pub fn defense(&self) -> Defense {
        self.defense
    }

    pub fn set_armor(&mut self, armor: f32) -> Result<(), EntityError> {
        EntityError::check_amount("set_armor", armor)?;
        self.defense.armor = armor;
        Ok(())
    }

    pub fn set_bonus_armor(&mut self, bonus_armor: f32) -> Result<(), EntityError> {
        EntityError::check_amount("set_bonus_armor", bonus_armor)?;
        self.defense.bonus_armor = bonus_armor;
        Ok(())
    }

    /// Changes the maximum, rescaling health to keep the same fraction.
    pub fn set_max_health(&mut self, max_health: f32) -> Result<(), EntityError> {
        check_max_health(max_health)?;

        let fraction = self.health_fraction();
        self.max_health = max_health;
        self.health = (max_health * fraction).clamp(0.0, max_health);
        Ok(())
    }

    /// Applies damage through the configured formula.
    ///
    /// Returns the formula's total, or 0 if the entity is invulnerable or
    /// already at zero health.
    pub fn take_damage(&mut self, amount: f32, modifier: f32) -> Result<f32, EntityError> {
        EntityError::check_amount("take_damage", amount)?;
        EntityError::check_amount("take_damage", modifier)?;

        if self.ignores_damage() {
            return Ok(0.0);
        }

        let total = self
            .formula
            .calculate(amount, modifier, self.defense)
            .max(0.0);
        self.apply_damage(total);
        Ok(total)
    }

    /// Applies damage that bypasses the formula.
    pub fn take_fixed_damage(&mut self, amount: f32) -> Result<f32, EntityError> {
        EntityError::check_amount("take_fixed_damage", amount)?;

        if self.ignores_damage() {
            return Ok(0.0);
        }

        self.apply_damage(amount);
        Ok(amount)
    }

    /// Restores health up to the maximum.
    ///
    /// A dead entity is only healed when `force` is set. Returns the amount
    /// actually restored.
    pub fn restore_health(&mut self, amount: f32, force: bool) -> Result<f32, EntityError> {
        EntityError::check_amount("restore_health", amount)?;

        if self.health <= 0.0 && !force {
            return Ok(0.0);
        }

        let before = self.health;
        self.health = (self.health + amount).min(self.max_health);
        self.emit_changed();
        Ok(self.health - before)
    }

    fn ignores_damage(&self) -> bool {
        self.invulnerable || self.health <= 0.0
    }

    fn apply_damage(&mut self, total: f32) {
        self.health = (self.health - total).max(0.0);

        if self.health > 0.0 {
            self.emit_changed();
            return;
        }

        debug!(target: "status::health", "health depleted");
        self.listeners.emit(HealthEvent::Death);
    }

    fn emit_changed(&mut self) {
        let event = HealthEvent::Changed {
            health: self.health,
            fraction: self.health_fraction(),
        };
        self.listeners.emit(event);
    }
}

fn check_max_health(max_health: f32) -> Result<(), EntityError> {
    if max_health > 0.0 {
        Ok(())
    } else {
        Err(EntityError::InvalidMaxHealth(max_health))
    }
}

impl Entity for HealthLedger {
    fn take_damage(&mut self, amount: f32, multiplier: f32) -> Result<f32, EntityError> {
        HealthLedger::take_damage(self, amount, multiplier)
    }

    fn take_fixed_damage(&mut self, amount: f32) -> Result<f32, EntityError> {
        HealthLedger::take_fixed_damage(self, amount)
    }

    fn restore_health(&mut self, amount: f32) -> Result<f32, EntityError> {
        HealthLedger::restore_health(self, amount, false)
    }

    fn is_alive(&self) -> bool {
        HealthLedger::is_alive(self)
    }
}

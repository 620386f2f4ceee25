//! Damage formulas used by [`HealthLedger::take_damage`](super::HealthLedger::take_damage).

use core::fmt;

use crate::config::DamageFormulaKind;

/// Armor values a formula may consult.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Defense {
    pub armor: f32,
    pub bonus_armor: f32,
}

impl Defense {
    pub const NONE: Self = Self {
        armor: 0.0,
        bonus_armor: 0.0,
    };

    pub const fn new(armor: f32, bonus_armor: f32) -> Self {
        Self { armor, bonus_armor }
    }

    /// Combined armor, never negative.
    pub fn total(&self) -> f32 {
        (self.armor + self.bonus_armor).max(0.0)
    }
}

/// Turns a raw damage amount into the damage actually applied.
pub trait DamageFormula: fmt::Debug {
    fn calculate(&self, amount: f32, modifier: f32, defense: Defense) -> f32;
}

/// `amount * modifier`, ignoring armor.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScaledDamage;

impl DamageFormula for ScaledDamage {
    fn calculate(&self, amount: f32, modifier: f32, _defense: Defense) -> f32 {
        amount * modifier
    }
}

/// Diminishing-returns armor curve.
///
/// ```text
/// total = amount * modifier * amount / (amount + armor + bonus_armor)
/// ```
///
/// Large hits push through armor, small hits are mostly absorbed.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArmorMitigation;

impl DamageFormula for ArmorMitigation {
    fn calculate(&self, amount: f32, modifier: f32, defense: Defense) -> f32 {
        let denominator = amount + defense.total();
        if denominator <= 0.0 {
            return 0.0;
        }

        amount * modifier * (amount / denominator)
    }
}

impl DamageFormulaKind {
    /// Instantiates the formula this kind names.
    pub fn build(self) -> Box<dyn DamageFormula> {
        match self {
            Self::Scaled => Box::new(ScaledDamage),
            Self::ArmorMitigation => Box::new(ArmorMitigation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_ignores_armor() {
        let total = ScaledDamage.calculate(20.0, 1.5, Defense::new(100.0, 0.0));
        assert_eq!(total, 30.0);
    }

    #[test]
    fn armor_without_armor_is_plain_scaling() {
        assert_eq!(ArmorMitigation.calculate(20.0, 1.0, Defense::NONE), 20.0);
    }

    #[test]
    fn armor_mitigation_has_diminishing_returns() {
        let defense = Defense::new(15.0, 5.0);

        // 20 * 20 / 40 = 10
        assert_eq!(ArmorMitigation.calculate(20.0, 1.0, defense), 10.0);
        // 60 * 60 / 80 = 45
        assert_eq!(ArmorMitigation.calculate(60.0, 1.0, defense), 45.0);
        // modifier scales the mitigated amount
        assert_eq!(ArmorMitigation.calculate(20.0, 2.0, defense), 20.0);
    }

    #[test]
    fn zero_damage_does_not_divide_by_zero() {
        assert_eq!(ArmorMitigation.calculate(0.0, 1.0, Defense::NONE), 0.0);
    }
}

//! Tunable parameters for the status slot engine and the health ledger.

/// Configuration for a [`StatusSlots`](crate::status::StatusSlots) engine.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Number of slots attached to one entity.
    pub max_statuses: usize,
}

impl StatusConfig {
    pub const DEFAULT_MAX_STATUSES: usize = 8;

    pub fn new() -> Self {
        Self {
            max_statuses: Self::DEFAULT_MAX_STATUSES,
        }
    }

    pub fn with_max_statuses(max_statuses: usize) -> Self {
        Self { max_statuses }
    }
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Which damage formula a freshly constructed ledger uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageFormulaKind {
    /// `amount * modifier`
    #[default]
    Scaled,
    /// Diminishing-returns armor curve, see [`ArmorMitigation`](crate::health::ArmorMitigation).
    ArmorMitigation,
}

/// Configuration for a [`HealthLedger`](crate::health::HealthLedger).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    pub max_health: f32,
    pub invulnerable: bool,
    pub armor: f32,
    pub bonus_armor: f32,
    pub formula: DamageFormulaKind,
}

impl HealthConfig {
    pub const DEFAULT_MAX_HEALTH: f32 = 100.0;

    pub fn new() -> Self {
        Self {
            max_health: Self::DEFAULT_MAX_HEALTH,
            invulnerable: false,
            armor: 0.0,
            bonus_armor: 0.0,
            formula: DamageFormulaKind::Scaled,
        }
    }

    pub fn with_max_health(max_health: f32) -> Self {
        Self {
            max_health,
            ..Self::new()
        }
    }
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-step frame driver settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Seconds advanced by one evaluation step.
    pub frame_step: f32,
    /// Upper bound on steps run for a single frame; excess time is dropped.
    pub max_steps_per_frame: u32,
}

impl RuntimeConfig {
    pub const DEFAULT_FRAME_STEP: f32 = 1.0 / 60.0;
    pub const DEFAULT_MAX_STEPS_PER_FRAME: u32 = 8;

    pub fn new() -> Self {
        Self {
            frame_step: Self::DEFAULT_FRAME_STEP,
            max_steps_per_frame: Self::DEFAULT_MAX_STEPS_PER_FRAME,
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// All tunables, one table per component.
///
/// ```toml
/// [status]
/// max_statuses = 8
///
/// [health]
/// max_health = 100.0
/// formula = "armor_mitigation"
///
/// [runtime]
/// frame_step = 0.0166667
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub status: StatusConfig,
    pub health: HealthConfig,
    pub runtime: RuntimeConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.status.max_statuses, 8);
        assert_eq!(config.health.max_health, 100.0);
        assert_eq!(config.health.formula, DamageFormulaKind::Scaled);
        assert_eq!(config.runtime.max_steps_per_frame, 8);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "health": { "armor": 4.0, "formula": "armor_mitigation" } }"#)
                .unwrap();

        assert_eq!(config.health.armor, 4.0);
        assert_eq!(config.health.max_health, 100.0);
        assert_eq!(config.health.formula, DamageFormulaKind::ArmorMitigation);
        assert_eq!(config.status, StatusConfig::new());
    }
}

//! Per-ruleset troop configuration.
//!
//! A [`TroopConfig`] is built once per ruleset (in code or from RON),
//! validated, and then shared read-only by both sides of every battle.

use serde::{Deserialize, Serialize};

use crate::error::{BattleError, Result};
use crate::math::{mul, Wide};
use crate::troops::TroopType;

/// Normalization factor used when a ruleset does not name one.
pub const DEFAULT_NORMALIZATION_FACTOR: u64 = 1_000;

/// Immutable combat constants for one ruleset.
///
/// # Example RON
///
/// ```ron
/// TroopConfig(
///     health: 1,
///     knight_strength: 1,
///     paladin_strength: 1,
///     crossbowman_strength: 1,
///     advantage_percent: 1000,     // 10% in basis points
///     disadvantage_percent: 1000,
///     battle_time_scale: 1000,
///     battle_max_time_seconds: 172800,
/// )
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TroopConfig {
    /// Base health of a single troop.
    pub health: u64,

    /// Strength coefficient per knight.
    pub knight_strength: u64,

    /// Strength coefficient per paladin.
    pub paladin_strength: u64,

    /// Strength coefficient per crossbowman.
    pub crossbowman_strength: u64,

    /// Bonus for the advantaged matchup, in basis points.
    pub advantage_percent: u64,

    /// Penalty for the disadvantaged matchup, in basis points.
    pub disadvantage_percent: u64,

    /// Divisor translating army size into elapsed time.
    pub battle_time_scale: u64,

    /// Upper bound on battle length, in seconds.
    pub battle_max_time_seconds: u64,

    /// Fixed multiplier applied to every troop count and health value.
    #[serde(default = "default_normalization_factor")]
    pub normalization_factor: u64,
}

/// Default normalization factor for deserialized configs.
const fn default_normalization_factor() -> u64 {
    DEFAULT_NORMALIZATION_FACTOR
}

impl Default for TroopConfig {
    /// The stock ruleset: every troop has 1 health and 1 strength,
    /// 10% advantage/disadvantage, two-day cap.
    fn default() -> Self {
        Self {
            health: 1,
            knight_strength: 1,
            paladin_strength: 1,
            crossbowman_strength: 1,
            advantage_percent: 1_000,
            disadvantage_percent: 1_000,
            battle_time_scale: 1_000,
            battle_max_time_seconds: 2 * 86_400,
            normalization_factor: DEFAULT_NORMALIZATION_FACTOR,
        }
    }
}

impl TroopConfig {
    /// Strength coefficient for a troop type.
    #[must_use]
    pub const fn strength_of(&self, troop_type: TroopType) -> u64 {
        match troop_type {
            TroopType::Knight => self.knight_strength,
            TroopType::Paladin => self.paladin_strength,
            TroopType::Crossbowman => self.crossbowman_strength,
        }
    }

    /// Health of one whole troop, in normalization units.
    pub fn single_troop_health(&self) -> Result<Wide> {
        mul(
            Wide::from(self.health),
            Wide::from(self.normalization_factor),
            "single troop health",
        )
    }

    /// Normalization factor as a wide value.
    #[must_use]
    pub fn normalization(&self) -> Wide {
        Wide::from(self.normalization_factor)
    }

    /// Check that this config cannot drive the engine into a division by zero.
    ///
    /// # Errors
    ///
    /// Returns [`BattleError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.health == 0 {
            return Err(BattleError::InvalidConfig(
                "health must be greater than zero".to_string(),
            ));
        }
        if self.battle_time_scale == 0 {
            return Err(BattleError::InvalidConfig(
                "battle_time_scale must be greater than zero".to_string(),
            ));
        }
        if self.normalization_factor == 0 {
            return Err(BattleError::InvalidConfig(
                "normalization_factor must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a config from a RON string.
    ///
    /// `label` names the source in error messages.
    pub fn from_ron_str(source: &str, label: &str) -> Result<Self> {
        let config: Self = ron::from_str(source).map_err(|e| BattleError::DataParseError {
            path: label.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }
}

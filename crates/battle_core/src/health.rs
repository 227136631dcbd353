//! Health pools and closed-form depletion.

use serde::{Deserialize, Serialize};

use crate::config::TroopConfig;
use crate::error::{BattleError, Result};
use crate::math::{div, mul, Wide};

/// Current and lifetime health of one side, in normalization units.
///
/// `current <= lifetime` holds for every pool built through [`Health::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Health {
    current: Wide,
    lifetime: Wide,
}

impl Health {
    /// Create a pool, rejecting `current > lifetime`.
    pub fn new(current: Wide, lifetime: Wide) -> Result<Self> {
        if current > lifetime {
            return Err(BattleError::HealthExceedsLifetime { current, lifetime });
        }
        Ok(Self { current, lifetime })
    }

    /// A pool at full health.
    #[must_use]
    pub const fn full(lifetime: Wide) -> Self {
        Self {
            current: lifetime,
            lifetime,
        }
    }

    /// Create a pool from unscaled values, multiplying both by `factor`.
    pub fn from_whole(current: u64, lifetime: u64, factor: u64) -> Result<Self> {
        let factor = Wide::from(factor);
        Self::new(
            mul(Wide::from(current), factor, "normalized health")?,
            mul(Wide::from(lifetime), factor, "normalized health")?,
        )
    }

    /// Current health.
    #[must_use]
    pub const fn current(&self) -> Wide {
        self.current
    }

    /// Lifetime (max) health.
    #[must_use]
    pub const fn lifetime(&self) -> Wide {
        self.lifetime
    }

    /// Whether no health remains.
    #[must_use]
    pub const fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// The pool after losing `amount`, floored at zero.
    #[must_use]
    pub const fn after_damage(self, amount: Wide) -> Self {
        Self {
            current: self.current.saturating_sub(amount),
            lifetime: self.lifetime,
        }
    }

    /// Number of steps until this pool is depleted by a constant `deduction`.
    ///
    /// An army only dies once its last troop is gone, so when a single step
    /// deals less than one troop's health the last troop is counted as a
    /// full step of its own instead of ceiling-dividing the raw total.
    ///
    /// # Errors
    ///
    /// [`BattleError::HealthNotTroopMultiple`] when the pool is not a whole
    /// number of troops.
    pub fn steps_to_die(&self, deduction: Wide, config: &TroopConfig) -> Result<u64> {
        if self.current == 0 || deduction == 0 {
            return Ok(0);
        }

        let single_troop_health = config.single_troop_health()?;

        if self.current <= deduction {
            return Ok(1);
        }

        if single_troop_health == 0 || self.current % single_troop_health != 0 {
            return Err(BattleError::HealthNotTroopMultiple {
                current: self.current,
                troop_health: single_troop_health,
            });
        }

        let steps = if deduction >= single_troop_health {
            let mut steps = div(self.current, deduction, "steps to die")?;
            if self.current % deduction > 0 {
                steps += 1;
            }
            steps
        } else {
            let less_one_troop = self.current - single_troop_health;
            div(less_one_troop, deduction, "steps to die")? + 1
        };

        u64::try_from(steps).map_err(|_| BattleError::ArithmeticOverflow("steps to die"))
    }
}

//! Troop types and composite armies.
//!
//! The three troop types form a rock-paper-scissors cycle:
//! Knight beats Paladin, Paladin beats Crossbowman, Crossbowman beats Knight.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::TroopConfig;
use crate::error::{BattleError, Result};
use crate::health::Health;
use crate::math::{mul, Wide};

/// One of the three troop types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TroopType {
    /// Heavy cavalry. Strong against paladins.
    Knight,
    /// Holy infantry. Strong against crossbowmen.
    Paladin,
    /// Ranged infantry. Strong against knights.
    Crossbowman,
}

impl TroopType {
    /// All troop types in canonical order.
    pub const ALL: [TroopType; 3] = [Self::Knight, Self::Paladin, Self::Crossbowman];

    /// Position of this type in [`Self::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Knight => 0,
            Self::Paladin => 1,
            Self::Crossbowman => 2,
        }
    }

    /// The type this one has an advantage against.
    #[must_use]
    pub const fn advantage_against(self) -> Self {
        match self {
            Self::Knight => Self::Paladin,
            Self::Paladin => Self::Crossbowman,
            Self::Crossbowman => Self::Knight,
        }
    }

    /// The type this one is at a disadvantage against.
    #[must_use]
    pub const fn disadvantage_against(self) -> Self {
        match self {
            Self::Knight => Self::Crossbowman,
            Self::Paladin => Self::Knight,
            Self::Crossbowman => Self::Paladin,
        }
    }
}

impl fmt::Display for TroopType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Knight => "knight",
            Self::Paladin => "paladin",
            Self::Crossbowman => "crossbowman",
        };
        f.write_str(name)
    }
}

/// A composite army: per-type troop counts plus their lifetime counts.
///
/// Counts are stored in normalization units, i.e. one whole troop is
/// `normalization_factor` units. Lifetime counts are the counts the army
/// started with and drive proportional attrition after a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Troops {
    counts: [u64; 3],
    lifetime: [u64; 3],
}

impl Troops {
    /// Create an army from already-normalized counts.
    ///
    /// Lifetime counts start equal to the current counts.
    #[must_use]
    pub const fn new(knights: u64, paladins: u64, crossbowmen: u64) -> Self {
        let counts = [knights, paladins, crossbowmen];
        Self {
            counts,
            lifetime: counts,
        }
    }

    /// Create an army from whole troop counts, scaling each by `factor`.
    pub fn from_whole(knights: u64, paladins: u64, crossbowmen: u64, factor: u64) -> Result<Self> {
        let scale = |count: u64| {
            count
                .checked_mul(factor)
                .ok_or(BattleError::ArithmeticOverflow("normalized troop count"))
        };
        Ok(Self::new(scale(knights)?, scale(paladins)?, scale(crossbowmen)?))
    }

    /// Replace the lifetime counts (already normalized).
    #[must_use]
    pub const fn with_lifetime(mut self, knights: u64, paladins: u64, crossbowmen: u64) -> Self {
        self.lifetime = [knights, paladins, crossbowmen];
        self
    }

    /// Current count of one troop type.
    #[must_use]
    pub const fn count(&self, troop_type: TroopType) -> u64 {
        self.counts[troop_type.index()]
    }

    /// Lifetime count of one troop type.
    #[must_use]
    pub const fn lifetime_count(&self, troop_type: TroopType) -> u64 {
        self.lifetime[troop_type.index()]
    }

    /// Current knight count.
    #[must_use]
    pub const fn knights(&self) -> u64 {
        self.count(TroopType::Knight)
    }

    /// Current paladin count.
    #[must_use]
    pub const fn paladins(&self) -> u64 {
        self.count(TroopType::Paladin)
    }

    /// Current crossbowman count.
    #[must_use]
    pub const fn crossbowmen(&self) -> u64 {
        self.count(TroopType::Crossbowman)
    }

    /// Sum of all current counts.
    #[must_use]
    pub fn total(&self) -> Wide {
        self.counts.iter().map(|&c| Wide::from(c)).sum()
    }

    /// Whether the army holds no troops at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// `(type, count)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (TroopType, u64)> + '_ {
        TroopType::ALL.into_iter().map(|t| (t, self.count(t)))
    }

    /// Current counts with the normalization factor removed.
    ///
    /// Partial troops are dropped, never rounded up.
    #[must_use]
    pub fn whole_counts(&self, factor: u64) -> [u64; 3] {
        if factor == 0 {
            return self.counts;
        }
        self.counts.map(|c| c / factor)
    }

    /// Health pool of this army at full strength.
    pub fn full_health(&self, config: &TroopConfig) -> Result<Health> {
        let full = mul(Wide::from(config.health), self.total(), "full army health")?;
        Ok(Health::full(full))
    }
}

//! Resolved battle outcomes.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{BattleError, Result};
use crate::health::Health;
use crate::math::Wide;
use crate::troops::Troops;

/// Damage each side inflicts per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DamageDelta {
    /// Damage the attacker deals to the defender's health each step.
    pub attack: Wide,
    /// Damage the defender deals to the attacker's health each step.
    pub defence: Wide,
}

impl DamageDelta {
    /// Delta used when either side has zero strength.
    pub const DEGENERATE: Self = Self {
        attack: 1,
        defence: 1,
    };
}

/// Winner by damage delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// Attacker deals strictly more damage per step.
    Attacker,
    /// Defender deals strictly more damage per step.
    Defender,
    /// Both sides deal the same damage per step.
    Draw,
}

impl Winner {
    /// Compare the two deltas.
    #[must_use]
    pub fn from_delta(delta: DamageDelta) -> Self {
        match delta.attack.cmp(&delta.defence) {
            std::cmp::Ordering::Greater => Self::Attacker,
            std::cmp::Ordering::Less => Self::Defender,
            std::cmp::Ordering::Equal => Self::Draw,
        }
    }
}

/// Which side runs out of steps first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fate {
    /// The defender is destroyed before the attacker.
    AttackerWins,
    /// The attacker is destroyed before the defender.
    DefenderWins,
    /// Both sides are destroyed on the same step.
    MutualDestruction,
}

impl Fate {
    /// Compare steps-to-die of both sides.
    #[must_use]
    pub fn from_steps(attacker_steps: u64, defender_steps: u64) -> Self {
        match attacker_steps.cmp(&defender_steps) {
            std::cmp::Ordering::Greater => Self::AttackerWins,
            std::cmp::Ordering::Less => Self::DefenderWins,
            std::cmp::Ordering::Equal => Self::MutualDestruction,
        }
    }
}

impl fmt::Display for Fate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AttackerWins => f.write_str("attack wins"),
            Self::DefenderWins => f.write_str("defence wins"),
            Self::MutualDestruction => f.write_str("both attack and defence lose"),
        }
    }
}

/// A step count broken down into calendar units, one step per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BattleDuration {
    /// Whole days.
    pub days: u64,
    /// Hours past the last whole day.
    pub hours: u64,
    /// Minutes past the last whole hour.
    pub minutes: u64,
    /// Seconds past the last whole minute.
    pub seconds: u64,
}

impl BattleDuration {
    /// Break down a step count.
    #[must_use]
    pub const fn from_steps(steps: u64) -> Self {
        Self {
            days: steps / 86_400,
            hours: (steps % 86_400) / 3_600,
            minutes: (steps % 3_600) / 60,
            seconds: steps % 60,
        }
    }

    /// Total seconds represented.
    #[must_use]
    pub const fn total_seconds(&self) -> u64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }
}

impl fmt::Display for BattleDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Full record of one battle resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BattleOutcome {
    /// Attacker strength against the defender.
    pub attacker_strength: Wide,
    /// Defender strength against the attacker.
    pub defender_strength: Wide,
    /// Per-step damage of both sides.
    pub delta: DamageDelta,
    /// Steps until the attacker is depleted.
    pub attacker_steps_to_die: u64,
    /// Steps until the defender is depleted.
    pub defender_steps_to_die: u64,
    /// Battle length in steps.
    pub duration: u64,
    /// Winner by damage delta.
    pub winner: Winner,
    /// Which side is destroyed first.
    pub fate: Fate,
    /// Attacker health after the battle.
    pub attacker_health: Health,
    /// Defender health after the battle.
    pub defender_health: Health,
    /// Attacker troops after the battle.
    pub attacker_troops: Troops,
    /// Defender troops after the battle.
    pub defender_troops: Troops,
}

impl BattleOutcome {
    /// Canonical byte encoding of this outcome.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| BattleError::EncodingError(e.to_string()))
    }

    /// Decode an outcome produced by [`Self::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| BattleError::EncodingError(e.to_string()))
    }

    /// Hash of the canonical encoding, for determinism checks.
    pub fn state_hash(&self) -> Result<u64> {
        let bytes = self.to_bytes()?;
        let mut hasher = DefaultHasher::new();
        bytes.hash(&mut hasher);
        Ok(hasher.finish())
    }

    /// Battle length in calendar units.
    #[must_use]
    pub const fn duration_breakdown(&self) -> BattleDuration {
        BattleDuration::from_steps(self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_from_delta() {
        let attack = DamageDelta {
            attack: 72,
            defence: 60,
        };
        assert_eq!(Winner::from_delta(attack), Winner::Attacker);

        let defence = DamageDelta {
            attack: 57,
            defence: 62,
        };
        assert_eq!(Winner::from_delta(defence), Winner::Defender);

        assert_eq!(Winner::from_delta(DamageDelta::DEGENERATE), Winner::Draw);
    }

    #[test]
    fn test_fate_from_steps() {
        assert_eq!(Fate::from_steps(1_651, 1_376), Fate::AttackerWins);
        assert_eq!(Fate::from_steps(2_807, 3_141), Fate::DefenderWins);
        assert_eq!(Fate::from_steps(1_678, 1_678), Fate::MutualDestruction);
    }

    #[test]
    fn test_duration_breakdown() {
        let duration = BattleDuration::from_steps(2 * 86_400 + 3 * 3_600 + 4 * 60 + 5);
        assert_eq!(duration.days, 2);
        assert_eq!(duration.hours, 3);
        assert_eq!(duration.minutes, 4);
        assert_eq!(duration.seconds, 5);
        assert_eq!(duration.total_seconds(), 2 * 86_400 + 3 * 3_600 + 4 * 60 + 5);
        assert_eq!(duration.to_string(), "2d 3h 4m 5s");
    }

    #[test]
    fn test_duration_under_a_minute() {
        assert_eq!(BattleDuration::from_steps(6).to_string(), "0d 0h 0m 6s");
    }

    #[test]
    fn test_fate_display() {
        assert_eq!(Fate::AttackerWins.to_string(), "attack wins");
    }
}

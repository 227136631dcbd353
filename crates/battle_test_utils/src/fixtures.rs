//! Test fixtures and helpers.
//!
//! Pre-built armies and battles for consistent testing.

use battle_core::prelude::*;

/// The stock ruleset.
#[must_use]
pub fn default_config() -> TroopConfig {
    TroopConfig::default()
}

/// Stock ruleset with custom advantage and disadvantage basis points.
#[must_use]
pub fn config_with_matchups(advantage_percent: u64, disadvantage_percent: u64) -> TroopConfig {
    TroopConfig {
        advantage_percent,
        disadvantage_percent,
        ..TroopConfig::default()
    }
}

/// An army of whole troops under the default normalization factor.
///
/// # Panics
///
/// Panics if a count overflows once normalized (test setup only).
#[must_use]
pub fn army(knights: u64, paladins: u64, crossbowmen: u64) -> Troops {
    Troops::from_whole(knights, paladins, crossbowmen, DEFAULT_NORMALIZATION_FACTOR)
        .expect("fixture army overflowed")
}

/// An army made entirely of one troop type.
#[must_use]
pub fn pure_army(troop_type: TroopType, whole: u64) -> Troops {
    match troop_type {
        TroopType::Knight => army(whole, 0, 0),
        TroopType::Paladin => army(0, whole, 0),
        TroopType::Crossbowman => army(0, 0, whole),
    }
}

/// A battle where both sides start at full health.
///
/// # Panics
///
/// Panics if the config is invalid or health overflows (test setup only).
#[must_use]
pub fn full_battle(attacker: Troops, defender: Troops, config: TroopConfig) -> Battle {
    Battle::at_full_health(attacker, defender, config).expect("fixture battle is invalid")
}

/// Resolve a full-health battle.
///
/// # Panics
///
/// Panics if resolution fails (test setup only).
#[must_use]
pub fn resolve(attacker: Troops, defender: Troops, config: TroopConfig) -> BattleOutcome {
    full_battle(attacker, defender, config)
        .resolve()
        .expect("fixture battle failed to resolve")
}

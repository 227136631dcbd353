//! Proptest strategies for battle inputs.
//!
//! Ranges stay inside what real rulesets use so that generated battles
//! exercise the arithmetic without tripping overflow checks.

use battle_core::prelude::*;
use proptest::prelude::*;

/// Largest whole troop count per type generated by [`arb_troops`].
pub const MAX_WHOLE_TROOPS: u64 = 5_000;

/// Generate a valid troop configuration.
pub fn arb_config() -> impl Strategy<Value = TroopConfig> {
    (
        1u64..=10,
        (1u64..=10, 1u64..=10, 1u64..=10),
        (0u64..=10_000, 0u64..=10_000),
        1u64..=10_000,
        1u64..=200_000,
    )
        .prop_map(
            |(health, (knight, paladin, crossbowman), (advantage, disadvantage), scale, max_time)| {
                TroopConfig {
                    health,
                    knight_strength: knight,
                    paladin_strength: paladin,
                    crossbowman_strength: crossbowman,
                    advantage_percent: advantage,
                    disadvantage_percent: disadvantage,
                    battle_time_scale: scale,
                    battle_max_time_seconds: max_time,
                    normalization_factor: DEFAULT_NORMALIZATION_FACTOR,
                }
            },
        )
}

/// Generate an army of whole troops, normalized by the default factor.
pub fn arb_troops() -> impl Strategy<Value = Troops> {
    (
        0u64..=MAX_WHOLE_TROOPS,
        0u64..=MAX_WHOLE_TROOPS,
        0u64..=MAX_WHOLE_TROOPS,
    )
        .prop_map(|(knights, paladins, crossbowmen)| {
            Troops::new(
                knights * DEFAULT_NORMALIZATION_FACTOR,
                paladins * DEFAULT_NORMALIZATION_FACTOR,
                crossbowmen * DEFAULT_NORMALIZATION_FACTOR,
            )
        })
}

/// Generate a non-empty army.
pub fn arb_nonempty_troops() -> impl Strategy<Value = Troops> {
    arb_troops().prop_filter("army must hold at least one troop", |t| !t.is_empty())
}

/// Generate a full-health battle under a random ruleset.
pub fn arb_battle() -> impl Strategy<Value = Battle> {
    (arb_troops(), arb_troops(), arb_config()).prop_filter_map(
        "battle inputs must be valid",
        |(attacker, defender, config)| Battle::at_full_health(attacker, defender, config).ok(),
    )
}

/// Generate a full-health battle where both sides hold troops.
pub fn arb_contested_battle() -> impl Strategy<Value = Battle> {
    (arb_nonempty_troops(), arb_nonempty_troops(), arb_config()).prop_filter_map(
        "battle inputs must be valid",
        |(attacker, defender, config)| Battle::at_full_health(attacker, defender, config).ok(),
    )
}

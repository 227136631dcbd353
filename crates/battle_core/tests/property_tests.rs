//! Property-based tests over random rulesets and armies.

use battle_core::prelude::*;
use battle_test_utils::determinism::{run_parallel_resolutions, verify_encoding_round_trip};
use battle_test_utils::proptest::prelude::*;
use battle_test_utils::strategies::{arb_battle, arb_config, arb_contested_battle, arb_troops};

proptest! {
    /// Repeated resolution yields byte-identical outcomes.
    #[test]
    fn prop_resolution_is_deterministic(battle in arb_battle()) {
        let first = battle.resolve().unwrap();
        let second = battle.resolve().unwrap();
        prop_assert_eq!(first.to_bytes().unwrap(), second.to_bytes().unwrap());
        prop_assert!(verify_encoding_round_trip(&first));
    }

    /// Zero strength on either side forces unit deltas on both.
    #[test]
    fn prop_zero_strength_gives_unit_deltas(battle in arb_battle()) {
        let outcome = battle.resolve().unwrap();
        if outcome.attacker_strength == 0 || outcome.defender_strength == 0 {
            prop_assert_eq!(outcome.delta, DamageDelta::DEGENERATE);
        }
        prop_assert!(outcome.delta.attack >= 1);
        prop_assert!(outcome.delta.defence >= 1);
    }

    /// Health only ever goes down.
    #[test]
    fn prop_health_is_monotonic(battle in arb_battle()) {
        let outcome = battle.resolve().unwrap();
        prop_assert!(outcome.attacker_health.current() <= battle.attacker_health().current());
        prop_assert!(outcome.defender_health.current() <= battle.defender_health().current());
        prop_assert_eq!(outcome.attacker_health.lifetime(), battle.attacker_health().lifetime());
        prop_assert_eq!(outcome.defender_health.lifetime(), battle.defender_health().lifetime());
    }

    /// No troop type ever ends above its lifetime count, and counts are whole troops.
    #[test]
    fn prop_troops_are_conserved(battle in arb_battle()) {
        let outcome = battle.resolve().unwrap();
        let factor = battle.config().normalization_factor;
        for (after, before) in [
            (&outcome.attacker_troops, battle.attacker()),
            (&outcome.defender_troops, battle.defender()),
        ] {
            for troop_type in TroopType::ALL {
                prop_assert!(after.count(troop_type) <= before.lifetime_count(troop_type));
                prop_assert_eq!(after.count(troop_type) % factor, 0);
                prop_assert_eq!(after.lifetime_count(troop_type), before.lifetime_count(troop_type));
            }
        }
    }

    /// A contested battle lasts at least one step and never beyond the time cap.
    #[test]
    fn prop_duration_is_bounded(battle in arb_contested_battle()) {
        let outcome = battle.resolve().unwrap();
        prop_assert!(outcome.duration >= 1);
        if outcome.attacker_strength > 0 && outcome.defender_strength > 0 {
            let cap = battle.config().battle_max_time_seconds + 1;
            prop_assert!(outcome.duration <= cap, "duration {} > cap {}", outcome.duration, cap);
        }
    }

    /// Swapping the sides swaps every per-side field.
    #[test]
    fn prop_sides_are_symmetric(
        attacker in arb_troops(),
        defender in arb_troops(),
        config in arb_config(),
    ) {
        let forward = Battle::at_full_health(attacker, defender, config).unwrap().resolve().unwrap();
        let reverse = Battle::at_full_health(defender, attacker, config).unwrap().resolve().unwrap();
        prop_assert_eq!(forward.attacker_strength, reverse.defender_strength);
        prop_assert_eq!(forward.delta.attack, reverse.delta.defence);
        prop_assert_eq!(forward.duration, reverse.duration);
        prop_assert_eq!(forward.attacker_troops, reverse.defender_troops);
    }

    /// Strength against any army never drops below zero nor exceeds base plus full bonus.
    #[test]
    fn prop_strength_is_bounded(
        attacker in arb_troops(),
        defender in arb_troops(),
        config in arb_config(),
    ) {
        let strength = strength_against(&attacker, &defender, &config).unwrap();
        let mut ceiling: Wide = 0;
        for troop_type in TroopType::ALL {
            let base = 1 + Wide::from(attacker.count(troop_type))
                * Wide::from(config.strength_of(troop_type));
            ceiling += base + base * Wide::from(config.advantage_percent) / 10_000;
        }
        prop_assert!(strength <= ceiling);
    }
}

#[test]
fn parallel_resolutions_match() {
    let config = TroopConfig::default();
    let attacker = Troops::from_whole(321, 123, 77, config.normalization_factor).unwrap();
    let defender = Troops::from_whole(90, 250, 180, config.normalization_factor).unwrap();

    let result = run_parallel_resolutions(
        || Battle::at_full_health(attacker, defender, config).unwrap(),
        16,
    )
    .unwrap();
    result.assert_deterministic();
}

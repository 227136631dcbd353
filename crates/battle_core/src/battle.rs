//! Battle resolution between two composite armies.
//!
//! A [`Battle`] is a transient aggregate: build it, query it, drop it.
//! Every query is a pure function of the five inputs and uses only
//! integer floor division, so a preview computed here matches the
//! settled result of the authoritative integer computation exactly.
//!
//! Pipeline:
//! 1. strength of each side against the other ([`crate::strength`])
//! 2. per-step damage deltas ([`Battle::compute_delta`])
//! 3. steps-to-die of each pool ([`Health::steps_to_die`])
//! 4. duration, winner, remaining health and troops ([`Battle::resolve`])

use crate::config::TroopConfig;
use crate::error::{BattleError, Result};
use crate::health::Health;
use crate::math::{add, div, mul, truncate_to_multiple, Wide};
use crate::outcome::{BattleOutcome, DamageDelta, Fate, Winner};
use crate::strength::strength_against;
use crate::troops::{TroopType, Troops};

/// Offset added to the scaled time in the time-limit denominator.
const TIME_LIMIT_OFFSET: Wide = 100_000;

/// Inputs of a single battle resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Battle {
    attacker: Troops,
    defender: Troops,
    attacker_health: Health,
    defender_health: Health,
    config: TroopConfig,
}

impl Battle {
    /// Create a battle from explicit health pools.
    ///
    /// # Errors
    ///
    /// Fails when `config` does not pass [`TroopConfig::validate`].
    pub fn new(
        attacker: Troops,
        defender: Troops,
        attacker_health: Health,
        defender_health: Health,
        config: TroopConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            attacker,
            defender,
            attacker_health,
            defender_health,
            config,
        })
    }

    /// Create a battle where both armies start at full health.
    pub fn at_full_health(attacker: Troops, defender: Troops, config: TroopConfig) -> Result<Self> {
        let attacker_health = attacker.full_health(&config)?;
        let defender_health = defender.full_health(&config)?;
        Self::new(attacker, defender, attacker_health, defender_health, config)
    }

    /// Attacking army.
    #[must_use]
    pub const fn attacker(&self) -> &Troops {
        &self.attacker
    }

    /// Defending army.
    #[must_use]
    pub const fn defender(&self) -> &Troops {
        &self.defender
    }

    /// Attacking health pool.
    #[must_use]
    pub const fn attacker_health(&self) -> &Health {
        &self.attacker_health
    }

    /// Defending health pool.
    #[must_use]
    pub const fn defender_health(&self) -> &Health {
        &self.defender_health
    }

    /// Ruleset in effect.
    #[must_use]
    pub const fn config(&self) -> &TroopConfig {
        &self.config
    }

    /// Attacker strength against the defender.
    pub fn attacker_strength(&self) -> Result<Wide> {
        strength_against(&self.attacker, &self.defender, &self.config)
    }

    /// Defender strength against the attacker.
    pub fn defender_strength(&self) -> Result<Wide> {
        strength_against(&self.defender, &self.attacker, &self.config)
    }

    /// Per-step damage both sides inflict.
    pub fn compute_delta(&self) -> Result<DamageDelta> {
        self.delta_for(self.attacker_strength()?, self.defender_strength()?)
    }

    fn delta_for(&self, attack_strength: Wide, defence_strength: Wide) -> Result<DamageDelta> {
        if attack_strength == 0 || defence_strength == 0 {
            tracing::warn!(
                attack_strength = %attack_strength,
                defence_strength = %defence_strength,
                "Zero strength, falling back to unit damage"
            );
            return Ok(DamageDelta::DEGENERATE);
        }

        let bigger = attack_strength.max(defence_strength);
        let smaller = attack_strength.min(defence_strength);

        let attack_damage_received = self.damage_received(
            self.attacker.total(),
            defence_strength,
            &self.attacker_health,
            smaller,
            bigger,
        )?;
        let defence_damage_received = self.damage_received(
            self.defender.total(),
            attack_strength,
            &self.defender_health,
            smaller,
            bigger,
        )?;

        Ok(DamageDelta {
            attack: defence_damage_received,
            defence: attack_damage_received,
        })
    }

    /// Damage one side receives per step.
    ///
    /// Every `1 +` keeps the intermediate times and the damage strictly
    /// positive, so a resolution always makes progress.
    fn damage_received(
        &self,
        army_count: Wide,
        opponent_strength: Wide,
        health: &Health,
        smaller: Wide,
        bigger: Wide,
    ) -> Result<Wide> {
        let config = &self.config;

        let seconds_to_die = add(
            1,
            div(
                div(mul(100, army_count, "seconds to die")?, 10, "seconds to die")?,
                opponent_strength,
                "seconds to die",
            )?,
            "seconds to die",
        )?;

        let scaled = add(
            1,
            div(
                mul(army_count, seconds_to_die, "scaled time")?,
                Wide::from(config.battle_time_scale),
                "scaled time",
            )?,
            "scaled time",
        )?;

        let capped = mul(
            mul(Wide::from(config.battle_max_time_seconds), scaled, "time limit")?,
            smaller,
            "time limit",
        )?;
        let limited = add(
            1,
            div(
                div(capped, add(scaled, TIME_LIMIT_OFFSET, "time limit")?, "time limit")?,
                bigger,
                "time limit",
            )?,
            "time limit",
        )?;

        add(
            1,
            div(health.current(), limited, "damage received")?,
            "damage received",
        )
    }

    /// Battle length in steps: the moment either side would be destroyed.
    pub fn duration(&self) -> Result<u64> {
        let delta = self.compute_delta()?;
        let (attacker_steps, defender_steps) = self.steps_to_die(delta)?;
        Ok(attacker_steps.min(defender_steps))
    }

    fn steps_to_die(&self, delta: DamageDelta) -> Result<(u64, u64)> {
        let attacker_steps = self
            .attacker_health
            .steps_to_die(delta.defence, &self.config)?;
        let defender_steps = self
            .defender_health
            .steps_to_die(delta.attack, &self.config)?;
        Ok((attacker_steps, defender_steps))
    }

    /// Winner by damage delta. Equal deltas are a draw.
    pub fn winner(&self) -> Result<Winner> {
        Ok(Winner::from_delta(self.compute_delta()?))
    }

    /// Attacker and defender troops after the battle.
    pub fn remaining_troops(&self) -> Result<(Troops, Troops)> {
        let outcome = self.resolve()?;
        Ok((outcome.attacker_troops, outcome.defender_troops))
    }

    /// Run the full resolution.
    ///
    /// Either every field of the outcome is computed or an error is
    /// returned; there are no partial results.
    pub fn resolve(&self) -> Result<BattleOutcome> {
        let attacker_strength = self.attacker_strength()?;
        let defender_strength = self.defender_strength()?;
        let delta = self.delta_for(attacker_strength, defender_strength)?;

        let (attacker_steps_to_die, defender_steps_to_die) = self.steps_to_die(delta)?;
        let duration = attacker_steps_to_die.min(defender_steps_to_die);

        let attacker_health = self.attacker_health.after_damage(mul(
            delta.defence,
            Wide::from(duration),
            "damage taken",
        )?);
        let defender_health = self.defender_health.after_damage(mul(
            delta.attack,
            Wide::from(duration),
            "damage taken",
        )?);

        let factor = self.config.normalization();
        let attacker_troops = updated_troops(&attacker_health, &self.attacker, factor)?;
        let defender_troops = updated_troops(&defender_health, &self.defender, factor)?;

        let outcome = BattleOutcome {
            attacker_strength,
            defender_strength,
            delta,
            attacker_steps_to_die,
            defender_steps_to_die,
            duration,
            winner: Winner::from_delta(delta),
            fate: Fate::from_steps(attacker_steps_to_die, defender_steps_to_die),
            attacker_health,
            defender_health,
            attacker_troops,
            defender_troops,
        };

        tracing::debug!(
            attack_delta = %delta.attack,
            defence_delta = %delta.defence,
            duration,
            winner = ?outcome.winner,
            fate = %outcome.fate,
            "Battle resolved"
        );

        Ok(outcome)
    }
}

/// Rescale an army to the health it has left.
///
/// Counts are proportional to `current / lifetime` of the pool, applied to
/// the lifetime counts. Anything below one normalization unit is dropped
/// and every count is truncated down to a whole troop.
fn updated_troops(health: &Health, troops: &Troops, factor: Wide) -> Result<Troops> {
    let emptied = Troops::new(0, 0, 0).with_lifetime(
        troops.lifetime_count(TroopType::Knight),
        troops.lifetime_count(TroopType::Paladin),
        troops.lifetime_count(TroopType::Crossbowman),
    );

    if health.current() > health.lifetime() || health.lifetime() == 0 {
        return Ok(emptied);
    }

    let rescale = |troop_type: TroopType| -> Result<u64> {
        let scaled = div(
            mul(
                health.current(),
                Wide::from(troops.lifetime_count(troop_type)),
                "remaining troops",
            )?,
            health.lifetime(),
            "remaining troops",
        )?;
        let count = if scaled < factor {
            0
        } else {
            truncate_to_multiple(scaled, factor)
        };
        // current <= lifetime, so the count never exceeds its u64 lifetime count
        u64::try_from(count)
            .map_err(|_| BattleError::ArithmeticOverflow("remaining troops"))
    };

    Ok(Troops::new(
        rescale(TroopType::Knight)?,
        rescale(TroopType::Paladin)?,
        rescale(TroopType::Crossbowman)?,
    )
    .with_lifetime(
        troops.lifetime_count(TroopType::Knight),
        troops.lifetime_count(TroopType::Paladin),
        troops.lifetime_count(TroopType::Crossbowman),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: u64 = 1_000;

    fn army(knights: u64, paladins: u64, crossbowmen: u64) -> Troops {
        Troops::new(knights * N, paladins * N, crossbowmen * N)
    }

    fn battle(attacker: Troops, defender: Troops, config: TroopConfig) -> Battle {
        Battle::at_full_health(attacker, defender, config).unwrap()
    }

    #[test]
    fn test_mirrored_knights() {
        let b = battle(army(100, 0, 0), army(100, 0, 0), TroopConfig::default());
        let delta = b.compute_delta().unwrap();
        assert_eq!(delta, DamageDelta { attack: 59, defence: 59 });
        assert_eq!(b.duration().unwrap(), 1_678);
        assert_eq!(b.winner().unwrap(), Winner::Draw);
    }

    #[test]
    fn test_knights_against_paladins() {
        let b = battle(army(100, 0, 0), army(0, 100, 0), TroopConfig::default());
        let outcome = b.resolve().unwrap();
        assert_eq!(outcome.attacker_strength, 110_003);
        assert_eq!(outcome.defender_strength, 90_003);
        assert_eq!(outcome.delta, DamageDelta { attack: 72, defence: 60 });
        assert_eq!(outcome.attacker_steps_to_die, 1_651);
        assert_eq!(outcome.defender_steps_to_die, 1_376);
        assert_eq!(outcome.duration, 1_376);
        assert_eq!(outcome.winner, Winner::Attacker);
        assert_eq!(outcome.fate, Fate::AttackerWins);
        assert_eq!(outcome.attacker_health.current(), 17_440);
        assert_eq!(outcome.defender_health.current(), 928);
        assert_eq!(outcome.attacker_troops.knights(), 17_000);
        assert!(outcome.defender_troops.is_empty());
    }

    #[test]
    fn test_mixed_armies_defender_wins() {
        let b = battle(army(150, 20, 5), army(40, 60, 80), TroopConfig::default());
        let outcome = b.resolve().unwrap();
        assert_eq!(outcome.delta, DamageDelta { attack: 57, defence: 62 });
        assert_eq!(outcome.duration, 2_807);
        assert_eq!(outcome.winner, Winner::Defender);
        assert_eq!(outcome.fate, Fate::DefenderWins);
        assert!(outcome.attacker_troops.is_empty());
        assert_eq!(outcome.defender_health.current(), 20_001);
        assert_eq!(
            outcome.defender_troops,
            Troops::new(4_000, 6_000, 8_000).with_lifetime(40_000, 60_000, 80_000)
        );
    }

    #[test]
    fn test_single_troop_dies_in_one_step() {
        let b = battle(army(2, 0, 0), army(1, 0, 0), TroopConfig::default());
        let outcome = b.resolve().unwrap();
        assert_eq!(outcome.delta, DamageDelta { attack: 167, defence: 56 });
        assert_eq!(outcome.attacker_steps_to_die, 18);
        assert_eq!(outcome.defender_steps_to_die, 1);
        assert_eq!(outcome.duration, 1);
        assert_eq!(outcome.attacker_troops.knights(), 1_000);
    }

    #[test]
    fn test_time_scale_shortens_battle() {
        let config = TroopConfig {
            battle_time_scale: 1,
            battle_max_time_seconds: 100,
            ..TroopConfig::default()
        };
        let b = battle(army(3, 0, 0), army(0, 0, 2), config);
        let outcome = b.resolve().unwrap();
        assert_eq!(outcome.delta, DamageDelta { attack: 182, defence: 126 });
        assert_eq!(outcome.duration, 6);
        assert_eq!(outcome.attacker_troops.knights(), 2_000);
    }

    #[test]
    fn test_zero_strength_defaults_to_unit_delta() {
        let config = TroopConfig {
            advantage_percent: 0,
            disadvantage_percent: 10_000,
            ..TroopConfig::default()
        };
        let attacker_health = Health::full(3_000);
        let defender = army(5, 5, 5);
        let b = Battle::new(
            Troops::default(),
            defender,
            attacker_health,
            defender.full_health(&config).unwrap(),
            config,
        )
        .unwrap();
        assert_eq!(b.compute_delta().unwrap(), DamageDelta::DEGENERATE);
        assert_eq!(b.duration().unwrap(), 2_001);
    }

    #[test]
    fn test_empty_attacker_has_no_duration() {
        let b = battle(Troops::default(), army(10, 0, 0), TroopConfig::default());
        let outcome = b.resolve().unwrap();
        assert_eq!(outcome.attacker_strength, 3);
        assert_eq!(outcome.duration, 0);
        assert_eq!(outcome.defender_troops.knights(), 10_000);
    }

    #[test]
    fn test_remaining_troops_matches_resolve() {
        let b = battle(army(100, 0, 0), army(0, 100, 0), TroopConfig::default());
        let (attacker, defender) = b.remaining_troops().unwrap();
        let outcome = b.resolve().unwrap();
        assert_eq!(attacker, outcome.attacker_troops);
        assert_eq!(defender, outcome.defender_troops);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = TroopConfig {
            battle_time_scale: 0,
            ..TroopConfig::default()
        };
        let err = Battle::at_full_health(army(1, 0, 0), army(1, 0, 0), config).unwrap_err();
        assert!(matches!(err, BattleError::InvalidConfig(_)));
    }

    #[test]
    fn test_partial_troop_health_is_fatal() {
        let b = Battle::new(
            army(10, 0, 0),
            army(10, 0, 0),
            Health::new(9_500, 10_000).unwrap(),
            Health::full(10_000),
            TroopConfig::default(),
        )
        .unwrap();
        assert!(matches!(
            b.resolve(),
            Err(BattleError::HealthNotTroopMultiple { .. })
        ));
    }

    #[test]
    fn test_updated_troops_rescales_lifetime() {
        let troops = Troops::new(3_000, 2_000, 0);
        let health = Health::new(2_500, 5_000).unwrap();
        let updated = updated_troops(&health, &troops, 1_000).unwrap();
        assert_eq!(updated.knights(), 1_000);
        assert_eq!(updated.paladins(), 1_000);
        assert_eq!(updated.crossbowmen(), 0);
        assert_eq!(updated.lifetime_count(TroopType::Knight), 3_000);
    }

    #[test]
    fn test_updated_troops_zero_lifetime() {
        let troops = Troops::new(3_000, 0, 0);
        let updated = updated_troops(&Health::full(0), &troops, 1_000).unwrap();
        assert!(updated.is_empty());
    }
}

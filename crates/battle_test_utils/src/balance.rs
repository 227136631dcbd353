//! Balance testing utilities.
//!
//! Sweeps pure single-type armies against each other to check that a
//! ruleset keeps the knight > paladin > crossbowman > knight cycle, and
//! tallies win/draw counts over arbitrary batches of battles.

use battle_core::prelude::*;

use crate::fixtures::pure_army;

/// Outcome of one pure-type matchup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchupResult {
    /// Troop type of the attacking army.
    pub attacker: TroopType,
    /// Troop type of the defending army.
    pub defender: TroopType,
    /// Full resolution record.
    pub outcome: BattleOutcome,
}

/// Statistics for a set of battles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BattleStats {
    /// Total battles run.
    pub total_battles: u32,
    /// Battles won by the attacker (by delta).
    pub attacker_wins: u32,
    /// Battles won by the defender (by delta).
    pub defender_wins: u32,
    /// Battles with equal deltas.
    pub draws: u32,
    /// Sum of all durations, in steps.
    pub total_duration: u64,
}

impl BattleStats {
    /// Record one outcome.
    pub fn record(&mut self, outcome: &BattleOutcome) {
        self.total_battles += 1;
        self.total_duration += outcome.duration;
        match outcome.winner {
            Winner::Attacker => self.attacker_wins += 1,
            Winner::Defender => self.defender_wins += 1,
            Winner::Draw => self.draws += 1,
        }
    }

    /// Attacker win rate (0.0 to 1.0).
    pub fn attacker_win_rate(&self) -> f64 {
        if self.total_battles == 0 {
            return 0.5;
        }
        f64::from(self.attacker_wins) / f64::from(self.total_battles)
    }

    /// Mean duration in steps, floored.
    pub fn mean_duration(&self) -> u64 {
        if self.total_battles == 0 {
            return 0;
        }
        self.total_duration / u64::from(self.total_battles)
    }
}

/// Resolve every pure-type pairing with `size` whole troops per side.
///
/// Results are ordered attacker-major in [`TroopType::ALL`] order.
///
/// # Errors
///
/// Returns the first resolution error encountered.
pub fn matchup_matrix(config: TroopConfig, size: u64) -> Result<Vec<MatchupResult>> {
    let mut results = Vec::with_capacity(9);

    for attacker in TroopType::ALL {
        for defender in TroopType::ALL {
            let outcome =
                Battle::at_full_health(pure_army(attacker, size), pure_army(defender, size), config)?
                    .resolve()?;
            tracing::debug!(%attacker, %defender, winner = ?outcome.winner, "Matchup resolved");
            results.push(MatchupResult {
                attacker,
                defender,
                outcome,
            });
        }
    }

    Ok(results)
}

/// Resolve a batch of battles and tally the results.
///
/// # Errors
///
/// Returns the first resolution error encountered.
pub fn run_battles<'a, I>(battles: I) -> Result<BattleStats>
where
    I: IntoIterator<Item = &'a Battle>,
{
    let mut stats = BattleStats::default();
    for battle in battles {
        stats.record(&battle.resolve()?);
    }
    Ok(stats)
}

//! Strength comparison between two composite armies.
//!
//! Strength is always measured *against* a specific opponent: each troop
//! type gains a capped bonus from the type it beats and loses a capped
//! penalty to the type that beats it.
//!
//! The floor sequence below is load-bearing. `own * (opp * pct) / own`
//! is not simplified to `opp * pct`, and the caps are floored
//! independently, so results match the authoritative computation bit for
//! bit.

use crate::config::TroopConfig;
use crate::error::Result;
use crate::math::{add, div, mul, percentage_of, Wide, PERCENT_100};
use crate::troops::{TroopType, Troops};

/// Base strength of one troop type: `1 + count * coefficient`.
///
/// The `+1` keeps strength non-zero for an empty type.
pub fn base_strength(troops: &Troops, troop_type: TroopType, config: &TroopConfig) -> Result<Wide> {
    let raw = mul(
        Wide::from(troops.count(troop_type)),
        Wide::from(config.strength_of(troop_type)),
        "base strength",
    )?;
    add(1, raw, "base strength")
}

/// `floor(floor(own * (opponent * percent)) / own / 100%)`.
fn proportional_shift(own: Wide, opponent: Wide, percent: Wide) -> Result<Wide> {
    let scaled = mul(own, mul(opponent, percent, "matchup shift")?, "matchup shift")?;
    div(div(scaled, own, "matchup shift")?, PERCENT_100, "matchup shift")
}

/// Own strength after the advantage bonus, capped at `percent` of own.
fn with_advantage(own: Wide, opponent: Wide, percent: Wide) -> Result<Wide> {
    let bonus = proportional_shift(own, opponent, percent)?;
    let max_bonus = percentage_of(own, percent)?;
    Ok(add(own, bonus, "advantage")?.min(add(own, max_bonus, "advantage")?))
}

/// Own strength after the disadvantage penalty.
///
/// The penalty never exceeds `percent` of own strength and the result
/// never drops below zero.
fn with_disadvantage(own: Wide, opponent: Wide, percent: Wide) -> Result<Wide> {
    let penalty = proportional_shift(own, opponent, percent)?;
    let max_penalty = percentage_of(own, percent)?;
    Ok(own
        .saturating_sub(penalty)
        .max(own.saturating_sub(max_penalty)))
}

/// Total strength of one troop type of `attacker` facing `defender`.
pub fn type_strength(
    troop_type: TroopType,
    attacker: &Troops,
    defender: &Troops,
    config: &TroopConfig,
) -> Result<Wide> {
    let own = base_strength(attacker, troop_type, config)?;
    let advantaged_opponent = base_strength(defender, troop_type.advantage_against(), config)?;
    let disadvantaged_opponent =
        base_strength(defender, troop_type.disadvantage_against(), config)?;

    let advantaged = with_advantage(
        own,
        advantaged_opponent,
        Wide::from(config.advantage_percent),
    )?;
    let disadvantaged = with_disadvantage(
        own,
        disadvantaged_opponent,
        Wide::from(config.disadvantage_percent),
    )?;

    // advantaged >= own >= disadvantaged, so neither difference underflows
    Ok(own + (advantaged - own) - (own - disadvantaged))
}

/// Effective total strength of `attacker` against `defender`.
pub fn strength_against(attacker: &Troops, defender: &Troops, config: &TroopConfig) -> Result<Wide> {
    let mut total: Wide = 0;
    for troop_type in TroopType::ALL {
        let typed = type_strength(troop_type, attacker, defender, config)?;
        tracing::trace!(%troop_type, strength = %typed, "Type strength");
        total = add(total, typed, "army strength")?;
    }
    Ok(total)
}

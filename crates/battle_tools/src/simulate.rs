//! Battle simulation from ruleset and scenario files.

use std::fmt::Write as _;
use std::path::Path;

use battle_core::prelude::*;
use serde::Serialize;

use crate::error::{Result, ToolError};

fn read_file(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(ToolError::NotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Load and validate a ruleset file.
///
/// # Errors
///
/// Returns an error if the file is missing, malformed, or fails validation.
pub fn load_ruleset(path: &Path) -> Result<RulesetData> {
    let source = read_file(path)?;
    let ruleset = RulesetData::from_ron_str(&source, &path.display().to_string())?;

    let problems = ruleset.validate();
    if !problems.is_empty() {
        for problem in &problems {
            tracing::error!("{problem}");
        }
        return Err(ToolError::ValidationFailed(problems.len()));
    }

    Ok(ruleset)
}

/// Load a scenario file.
///
/// # Errors
///
/// Returns an error if the file is missing or malformed.
pub fn load_scenario(path: &Path) -> Result<ScenarioData> {
    let source = read_file(path)?;
    Ok(ScenarioData::from_ron_str(
        &source,
        &path.display().to_string(),
    )?)
}

/// Parse an inline army given as `KNIGHTS,PALADINS,CROSSBOWMEN` whole troops.
///
/// # Errors
///
/// Returns [`ToolError::InvalidArmy`] unless the input is exactly three
/// comma-separated unsigned integers.
pub fn parse_army(input: &str) -> Result<ArmySetup> {
    let counts = input
        .split(',')
        .map(|part| part.trim().parse::<u64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| ToolError::InvalidArmy(input.to_string()))?;

    match counts.as_slice() {
        &[knights, paladins, crossbowmen] => Ok(ArmySetup {
            knights,
            paladins,
            crossbowmen,
            health: None,
        }),
        _ => Err(ToolError::InvalidArmy(input.to_string())),
    }
}

/// Build an unnamed scenario from two inline armies at full health.
#[must_use]
pub fn inline_scenario(attacker: ArmySetup, defender: ArmySetup) -> ScenarioData {
    ScenarioData {
        name: "inline".to_string(),
        description: String::new(),
        attacker,
        defender,
    }
}

/// Everything printed for one simulated battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    /// Ruleset id.
    pub ruleset: String,
    /// Scenario name.
    pub scenario: String,
    /// Normalization factor used to convert counts back to whole troops.
    pub normalization_factor: u64,
    /// Resolution record.
    pub outcome: BattleOutcome,
    /// Duration as days, hours, minutes and seconds.
    pub breakdown: BattleDuration,
}

impl SimulationReport {
    /// Render as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render as human-readable text.
    #[must_use]
    pub fn to_text(&self) -> String {
        let o = &self.outcome;
        let factor = self.normalization_factor;
        let mut out = String::new();

        let _ = writeln!(out, "Scenario: {} (ruleset {})", self.scenario, self.ruleset);
        let _ = writeln!(
            out,
            "Strength: attacker {} / defender {}",
            o.attacker_strength, o.defender_strength
        );
        let _ = writeln!(
            out,
            "Damage per step: attacker deals {} / defender deals {}",
            o.delta.attack, o.delta.defence
        );
        let _ = writeln!(
            out,
            "Steps to die: attacker {} / defender {}",
            o.attacker_steps_to_die, o.defender_steps_to_die
        );
        let _ = writeln!(out, "Duration: {} steps ({})", o.duration, self.breakdown);
        let _ = writeln!(out, "Winner: {:?}", o.winner);
        let _ = writeln!(out, "Fate: {}", o.fate);
        for (side, troops) in [("Attacker", &o.attacker_troops), ("Defender", &o.defender_troops)] {
            let [knights, paladins, crossbowmen] = troops.whole_counts(factor);
            let _ = writeln!(
                out,
                "{side} remaining: {knights} knights, {paladins} paladins, {crossbowmen} crossbowmen"
            );
        }

        out
    }
}

/// Resolve `scenario` under `ruleset`.
///
/// # Errors
///
/// Returns an error if the scenario is inconsistent with the ruleset or
/// resolution overflows.
pub fn simulate(ruleset: &RulesetData, scenario: &ScenarioData) -> Result<SimulationReport> {
    let outcome = scenario.battle(ruleset.troops)?.resolve()?;
    tracing::info!(
        scenario = %scenario.name,
        ruleset = %ruleset.id,
        winner = ?outcome.winner,
        duration = outcome.duration,
        "Simulated battle"
    );

    Ok(SimulationReport {
        ruleset: ruleset.id.clone(),
        scenario: scenario.name.clone(),
        normalization_factor: ruleset.troops.normalization_factor,
        breakdown: outcome.duration_breakdown(),
        outcome,
    })
}

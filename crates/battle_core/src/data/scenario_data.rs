//! Battle scenario definitions.

use serde::{Deserialize, Serialize};

use crate::battle::Battle;
use crate::config::TroopConfig;
use crate::error::{BattleError, Result};
use crate::health::Health;
use crate::troops::Troops;

/// Health of one side in whole (unnormalized) health units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthSetup {
    /// Current health.
    pub current: u64,
    /// Lifetime (max) health.
    pub lifetime: u64,
}

/// One side of a scenario, counted in whole troops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArmySetup {
    /// Whole knights.
    #[serde(default)]
    pub knights: u64,
    /// Whole paladins.
    #[serde(default)]
    pub paladins: u64,
    /// Whole crossbowmen.
    #[serde(default)]
    pub crossbowmen: u64,
    /// Starting health; full health when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<HealthSetup>,
}

impl ArmySetup {
    /// Normalized troops for this side.
    pub fn troops(&self, config: &TroopConfig) -> Result<Troops> {
        Troops::from_whole(
            self.knights,
            self.paladins,
            self.crossbowmen,
            config.normalization_factor,
        )
    }

    /// Normalized health pool for this side.
    pub fn health(&self, config: &TroopConfig) -> Result<Health> {
        match self.health {
            Some(setup) => {
                Health::from_whole(setup.current, setup.lifetime, config.normalization_factor)
            }
            None => self.troops(config)?.full_health(config),
        }
    }
}

/// A complete battle preview configuration.
///
/// # Example RON
///
/// ```ron
/// ScenarioData(
///     name: "Knights charge paladins",
///     description: "Pure advantage matchup",
///     attacker: ArmySetup(knights: 100),
///     defender: ArmySetup(paladins: 100),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioData {
    /// Scenario name.
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Attacking side.
    pub attacker: ArmySetup,
    /// Defending side.
    pub defender: ArmySetup,
}

impl ScenarioData {
    /// Parse a scenario from RON.
    ///
    /// `label` names the source in error messages.
    pub fn from_ron_str(source: &str, label: &str) -> Result<Self> {
        ron::from_str(source).map_err(|e| BattleError::DataParseError {
            path: label.to_string(),
            message: e.to_string(),
        })
    }

    /// Build the battle this scenario describes under `config`.
    pub fn battle(&self, config: TroopConfig) -> Result<Battle> {
        Battle::new(
            self.attacker.troops(&config)?,
            self.defender.troops(&config)?,
            self.attacker.health(&config)?,
            self.defender.health(&config)?,
            config,
        )
    }
}

//! Named ruleset definitions.

use serde::{Deserialize, Serialize};

use crate::config::TroopConfig;
use crate::error::{BattleError, Result};

/// A named troop configuration loaded from a RON file.
///
/// # Example RON
///
/// ```ron
/// RulesetData(
///     id: "default",
///     name: "Default ruleset",
///     troops: TroopConfig(
///         health: 1,
///         knight_strength: 1,
///         paladin_strength: 1,
///         crossbowman_strength: 1,
///         advantage_percent: 1000,
///         disadvantage_percent: 1000,
///         battle_time_scale: 1000,
///         battle_max_time_seconds: 172800,
///     ),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesetData {
    /// Unique string identifier for this ruleset.
    pub id: String,

    /// Human-readable name.
    pub name: String,

    /// Free-form notes about the ruleset.
    #[serde(default)]
    pub description: String,

    /// Combat constants.
    pub troops: TroopConfig,
}

impl RulesetData {
    /// Parse a ruleset from RON without validating it.
    ///
    /// `label` names the source in error messages.
    pub fn from_ron_str(source: &str, label: &str) -> Result<Self> {
        ron::from_str(source).map_err(|e| BattleError::DataParseError {
            path: label.to_string(),
            message: e.to_string(),
        })
    }

    /// Check internal consistency of the ruleset.
    ///
    /// Returns a list of validation errors, empty when the ruleset is usable.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.id.trim().is_empty() {
            errors.push("Ruleset id is empty".to_string());
        }

        if let Err(e) = self.troops.validate() {
            errors.push(format!("Ruleset '{}': {e}", self.id));
        }

        errors
    }
}

//! # Battle Core
//!
//! Deterministic battle resolution between two composite armies.
//!
//! This crate contains **only** deterministic logic:
//! - No rendering
//! - No IO
//! - No randomness
//! - No floating-point math (128-bit integers, floor division)
//!
//! A preview computed here must match the settled result of an external
//! integer computation field for field, so every floor step of the
//! ruleset is reproduced literally.
//!
//! ## Crate Structure
//!
//! - [`config`] - Per-ruleset troop constants
//! - [`troops`] - Troop types and composite armies
//! - [`health`] - Health pools and steps-to-die
//! - [`strength`] - Strength of one army against another
//! - [`battle`] - Damage deltas, duration, winner and attrition
//! - [`outcome`] - Resolution records
//! - [`data`] - RON ruleset and scenario definitions
//! - [`math`] - Wide integer helpers
//!
//! ## Example
//!
//! ```
//! use battle_core::prelude::*;
//!
//! let config = TroopConfig::default();
//! let attacker = Troops::from_whole(100, 0, 0, config.normalization_factor)?;
//! let defender = Troops::from_whole(0, 100, 0, config.normalization_factor)?;
//!
//! let outcome = Battle::at_full_health(attacker, defender, config)?.resolve()?;
//! assert_eq!(outcome.winner, Winner::Attacker);
//! assert_eq!(outcome.duration, 1_376);
//! # Ok::<(), battle_core::error::BattleError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod battle;
pub mod config;
pub mod data;
pub mod error;
pub mod health;
pub mod math;
pub mod outcome;
pub mod strength;
pub mod troops;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::battle::Battle;
    pub use crate::config::{TroopConfig, DEFAULT_NORMALIZATION_FACTOR};
    pub use crate::data::{ArmySetup, HealthSetup, RulesetData, ScenarioData};
    pub use crate::error::{BattleError, Result};
    pub use crate::health::Health;
    pub use crate::math::Wide;
    pub use crate::outcome::{BattleDuration, BattleOutcome, DamageDelta, Fate, Winner};
    pub use crate::strength::strength_against;
    pub use crate::troops::{TroopType, Troops};
}

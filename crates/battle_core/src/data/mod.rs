//! Data structures for ruleset and scenario files.
//!
//! This module contains pure data structures designed to be deserialized
//! from RON. Parsing from strings lives here.
//!
//! **Note:** This module contains no IO. File loading is handled by
//! `battle_tools`.

mod ruleset_data;
mod scenario_data;

pub use ruleset_data::RulesetData;
pub use scenario_data::{ArmySetup, HealthSetup, ScenarioData};

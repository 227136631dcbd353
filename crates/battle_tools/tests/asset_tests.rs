//! Checks the shipped ruleset and scenario files.

use std::path::{Path, PathBuf};

use battle_core::prelude::*;
use battle_test_utils::fixtures::default_config;
use battle_tools::simulate::{load_ruleset, load_scenario, simulate};
use battle_tools::validate::validate_data_directory;

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../assets/data")
}

#[test]
fn shipped_rulesets_validate() {
    assert_eq!(validate_data_directory(&data_dir().join("rulesets")).unwrap(), 2);
}

#[test]
fn default_ruleset_matches_stock_constants() {
    let ruleset = load_ruleset(&data_dir().join("rulesets/default.ron")).unwrap();
    assert_eq!(ruleset.troops, default_config());
}

#[test]
fn shipped_scenarios_resolve() {
    let ruleset = load_ruleset(&data_dir().join("rulesets/default.ron")).unwrap();

    let charge = load_scenario(&data_dir().join("scenarios/knights_vs_paladins.ron")).unwrap();
    let report = simulate(&ruleset, &charge).unwrap();
    assert_eq!(report.outcome.duration, 1_376);
    assert_eq!(report.outcome.winner, Winner::Attacker);

    let mixed = load_scenario(&data_dir().join("scenarios/mixed_armies.ron")).unwrap();
    let report = simulate(&ruleset, &mixed).unwrap();
    assert_eq!(report.outcome.duration, 2_807);
    assert_eq!(report.outcome.winner, Winner::Defender);

    let wounded = load_scenario(&data_dir().join("scenarios/wounded_defender.ron")).unwrap();
    let report = simulate(&ruleset, &wounded).unwrap();
    assert!(report.outcome.defender_health.current() <= 50_000);
}

//! Battle preview - Development Tools

use std::path::{Path, PathBuf};

use battle_tools::simulate::{inline_scenario, load_ruleset, load_scenario, parse_army, simulate};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "battle-tools")]
#[command(about = "Development tools for deterministic battle previews")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate ruleset files
    Validate {
        /// Path to ruleset directory
        #[arg(default_value = "assets/data/rulesets")]
        path: String,
    },
    /// Resolve one battle and print the outcome
    Simulate {
        /// Ruleset file
        #[arg(long)]
        ruleset: PathBuf,
        /// Scenario file
        #[arg(long, conflicts_with_all = ["attacker", "defender"], required_unless_present = "attacker")]
        scenario: Option<PathBuf>,
        /// Attacking army as KNIGHTS,PALADINS,CROSSBOWMEN
        #[arg(long, requires = "defender")]
        attacker: Option<String>,
        /// Defending army as KNIGHTS,PALADINS,CROSSBOWMEN
        #[arg(long, requires = "attacker")]
        defender: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn run_simulate(
    ruleset: &Path,
    scenario: Option<&Path>,
    attacker: Option<&str>,
    defender: Option<&str>,
    json: bool,
) -> battle_tools::Result<String> {
    let ruleset = load_ruleset(ruleset)?;
    let scenario = match (scenario, attacker, defender) {
        (Some(path), _, _) => load_scenario(path)?,
        (None, Some(attacker), Some(defender)) => {
            inline_scenario(parse_army(attacker)?, parse_army(defender)?)
        }
        _ => return Err(battle_tools::ToolError::InvalidArmy(String::new())),
    };

    let report = simulate(&ruleset, &scenario)?;
    if json {
        report.to_json().map(|encoded| encoded + "\n")
    } else {
        Ok(report.to_text())
    }
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { path } => {
            tracing::info!("Validating ruleset files in: {path}");
            match battle_tools::validate::validate_data_directory(Path::new(&path)) {
                Ok(count) => tracing::info!("Validation passed ({count} files)"),
                Err(e) => {
                    tracing::error!("Validation failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Simulate {
            ruleset,
            scenario,
            attacker,
            defender,
            json,
        } => match run_simulate(
            &ruleset,
            scenario.as_deref(),
            attacker.as_deref(),
            defender.as_deref(),
            json,
        ) {
            Ok(report) => print!("{report}"),
            Err(e) => {
                tracing::error!("Simulation failed: {e}");
                std::process::exit(1);
            }
        },
    }
}

//! Determinism testing utilities.
//!
//! Provides a harness for verifying that battle resolution produces
//! byte-identical outcomes given identical inputs.
//!
//! # Testing Strategy
//!
//! A preview only has value if it matches the authoritative integer
//! computation exactly. Sources of divergence include:
//!
//! - **Floating-point math**: different CPUs can round differently.
//!   The core uses 128-bit integers and floor division throughout.
//!
//! - **Reordered arithmetic**: `a * (b * c) / a` is not `b * c` under
//!   overflow checks, and split floors are not a single floor. The
//!   regression vectors pin the exact sequence.
//!
//! - **Hidden state**: resolution must not depend on anything but its
//!   five inputs, which running many resolutions in parallel exposes.
//!
//! Outcomes are compared through [`BattleOutcome::state_hash`], a hash
//! of their canonical bincode encoding.

use std::thread;

use battle_core::prelude::*;

/// Result of a determinism test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeterminismResult {
    /// Whether all runs produced identical results.
    pub is_deterministic: bool,
    /// Hashes from each run.
    pub hashes: Vec<u64>,
}

impl DeterminismResult {
    /// Get all unique hashes (should be 1 for deterministic resolution).
    #[must_use]
    pub fn unique_hashes(&self) -> Vec<u64> {
        let mut unique: Vec<u64> = self.hashes.clone();
        unique.sort_unstable();
        unique.dedup();
        unique
    }

    /// Assert that resolution was deterministic, with a detailed error message.
    ///
    /// # Panics
    ///
    /// Panics if the runs produced different hashes.
    pub fn assert_deterministic(&self) {
        if !self.is_deterministic {
            let unique = self.unique_hashes();
            panic!(
                "Battle resolution is non-deterministic!\n\
                 Runs: {}\n\
                 Unique hashes: {} (expected 1)\n\
                 All hashes: {:?}",
                self.hashes.len(),
                unique.len(),
                self.hashes
            );
        }
    }
}

fn outcome_hash(battle: &Battle) -> Result<u64> {
    battle.resolve()?.state_hash()
}

/// Resolve the battle built by `setup` several times and compare outcomes.
///
/// # Errors
///
/// Returns the first resolution error encountered.
///
/// # Example
///
/// ```
/// use battle_test_utils::determinism::verify_determinism;
/// use battle_test_utils::fixtures::{army, default_config, full_battle};
///
/// let result = verify_determinism(5, || {
///     full_battle(army(100, 0, 0), army(0, 100, 0), default_config())
/// })
/// .unwrap();
/// result.assert_deterministic();
/// ```
pub fn verify_determinism<Setup>(runs: usize, setup: Setup) -> Result<DeterminismResult>
where
    Setup: Fn() -> Battle,
{
    let mut hashes = Vec::with_capacity(runs);

    for _ in 0..runs {
        hashes.push(outcome_hash(&setup())?);
    }

    let is_deterministic = hashes.windows(2).all(|w| w[0] == w[1]);

    Ok(DeterminismResult {
        is_deterministic,
        hashes,
    })
}

/// Resolve the same battle on `num_threads` scoped threads.
///
/// # Errors
///
/// Returns the first resolution error encountered.
///
/// # Panics
///
/// Panics if a worker thread panics.
pub fn run_parallel_resolutions<Setup>(
    setup: Setup,
    num_threads: usize,
) -> Result<DeterminismResult>
where
    Setup: Fn() -> Battle + Sync,
{
    let results: Vec<Result<u64>> = thread::scope(|s| {
        let handles: Vec<_> = (0..num_threads)
            .map(|_| s.spawn(|| outcome_hash(&setup())))
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().expect("resolution thread panicked"))
            .collect()
    });

    let hashes = results.into_iter().collect::<Result<Vec<u64>>>()?;
    let is_deterministic = hashes.windows(2).all(|w| w[0] == w[1]);

    Ok(DeterminismResult {
        is_deterministic,
        hashes,
    })
}

/// Verify that the canonical encoding round-trips without loss.
#[must_use]
pub fn verify_encoding_round_trip(outcome: &BattleOutcome) -> bool {
    let Ok(bytes) = outcome.to_bytes() else {
        return false;
    };
    match BattleOutcome::from_bytes(&bytes) {
        Ok(decoded) => decoded == *outcome,
        Err(_) => false,
    }
}

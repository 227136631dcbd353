//! Error types for battle resolution.

use thiserror::Error;

/// Result type alias using [`BattleError`].
pub type Result<T> = std::result::Result<T, BattleError>;

/// Top-level error type for all battle resolution errors.
///
/// Every variant is fatal: the engine refuses to produce an approximate
/// outcome once an input breaks one of its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    /// Health pool is not a whole number of troops.
    #[error("Health {current} is not a multiple of single troop health {troop_health}")]
    HealthNotTroopMultiple {
        /// Current health of the pool.
        current: u128,
        /// Health of a single troop in normalization units.
        troop_health: u128,
    },

    /// Health pool holds more than its lifetime maximum.
    #[error("Current health {current} exceeds lifetime health {lifetime}")]
    HealthExceedsLifetime {
        /// Current health of the pool.
        current: u128,
        /// Lifetime (max) health of the pool.
        lifetime: u128,
    },

    /// Troop configuration cannot be used for resolution.
    #[error("Invalid troop configuration: {0}")]
    InvalidConfig(String),

    /// A wide intermediate value overflowed.
    #[error("Arithmetic overflow while computing {0}")]
    ArithmeticOverflow(&'static str),

    /// A divisor was zero.
    #[error("Division by zero while computing {0}")]
    DivisionByZero(&'static str),

    /// Outcome could not be encoded.
    #[error("Failed to encode battle outcome: {0}")]
    EncodingError(String),

    /// Data file parsing error.
    #[error("Failed to parse data file '{path}': {message}")]
    DataParseError {
        /// Path (or label) of the data that failed to parse.
        path: String,
        /// Error message.
        message: String,
    },
}

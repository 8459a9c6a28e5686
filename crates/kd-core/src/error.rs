//! Error types for the dice engine.

/// Errors raised while configuring or performing a roll.
///
/// Messages interpolate the offending values; callers match on the
/// rendered wording, so keep it stable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DiceError {
    /// The minimum or maximum of a range is not a whole number.
    #[error(
        "[DiceRollError] Invalid range: Both minimum ({min}) and maximum ({max}) values must be integers."
    )]
    NonIntegerRange {
        /// The requested minimum.
        min: f64,
        /// The requested maximum.
        max: f64,
    },

    /// The minimum or maximum of a range is whole but does not fit in `i64`.
    #[error(
        "[DiceRollError] Invalid range: Both minimum ({min}) and maximum ({max}) values must fit in a signed 64-bit integer."
    )]
    BoundOutOfRange {
        /// The requested minimum.
        min: f64,
        /// The requested maximum.
        max: f64,
    },

    /// A range bound is not a number at all.
    #[error("[DiceRollError] Invalid range: \"{0}\" is not a number.")]
    UnparsableBound(String),

    /// The minimum or maximum of a range is below 1.
    #[error(
        "[DiceRollError] Invalid range: Both minimum ({min}) and maximum ({max}) values must be positive integers greater than zero."
    )]
    NonPositiveRange {
        /// The requested minimum.
        min: i64,
        /// The requested maximum.
        max: i64,
    },

    /// The minimum of a range is greater than its maximum.
    #[error(
        "[DiceRollError] Invalid range: The minimum value ({min}) cannot be greater than the maximum value ({max})."
    )]
    InvertedRange {
        /// The requested minimum.
        min: i64,
        /// The requested maximum.
        max: i64,
    },

    /// A seed does not fit in an unsigned 32-bit integer.
    #[error(
        "[DiceRollError] Seed must be a 32-bit unsigned integer (0 <= seed < 2^32). Received {0}."
    )]
    InvalidSeed(i64),

    /// A weight table face is not a positive integer.
    #[error("[DiceRollError] Invalid key \"{0}\": All keys must be positive integers.")]
    InvalidWeightKey(u32),

    /// A weight is not a number in `[0, 1]`.
    #[error(
        "[DiceRollError] Invalid value for key \"{face}\": All values must be a number between 0 and 1 (inclusive). Received \"{weight}\"."
    )]
    InvalidWeightValue {
        /// The face carrying the bad weight.
        face: u32,
        /// The rejected weight.
        weight: f64,
    },

    /// The weight table faces are not exactly `1..=N`.
    #[error(
        "[DiceRollError] Incorrect number of weight entries: Expected entries from 1 to {max_face}, but received {entries} entries total."
    )]
    WeightEntryCount {
        /// The largest face in the table.
        max_face: u32,
        /// How many faces the table holds.
        entries: usize,
    },

    /// The weights do not add up to exactly 1.
    #[error(
        "[DiceRollError] Incorrect weights provided, the total of all weights expected to be 1. Got {0}"
    )]
    WeightSum(f64),

    /// A weighted draw matched no face of the cumulative table.
    #[error("[DiceRollError] Invalid weights or random value.")]
    Distribution,

    /// A reroll mechanic was configured without target values.
    #[error("Target can not be an empty array.")]
    EmptyRerollTarget,

    /// A reroll budget is not a positive integer.
    #[error("Times must be a positive integer.")]
    InvalidRerollCount(i64),

    /// A summed or modified result does not fit in `i64`.
    #[error("[DiceRollError] The roll result does not fit in a signed 64-bit integer.")]
    ResultOverflow,

    /// A serialized roll configuration could not be read.
    #[error("invalid roll config: {0}")]
    InvalidConfig(String),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;

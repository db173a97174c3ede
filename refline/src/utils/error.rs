use thiserror::Error;

/// Specifies errors which can happen while selecting survivors.
///
/// A degenerate normalization is not an error: it is recovered with the per-axis fallback and
/// reported via [`crate::algorithms::nsga3::Normalization::fallback_axes`]. Same for a selection
/// which cannot be filled completely: see [`crate::survival::SurvivalOutcome::shortage`].
#[derive(Debug, Error)]
pub enum SelectionError {
    /// A vector has a dimension different from the expected one.
    #[error("vector of individual {index} has dimension {actual}, expected {expected}")]
    InvalidDimension {
        /// Index of the offending individual.
        index: usize,
        /// Expected dimension.
        expected: usize,
        /// Actual dimension.
        actual: usize,
    },

    /// Decision and objective lists describe different amounts of individuals.
    #[error("got {decisions} decision vectors and {objectives} objective vectors")]
    MismatchedParts {
        /// Amount of decision vectors.
        decisions: usize,
        /// Amount of objective vectors.
        objectives: usize,
    },

    /// An objective value is NaN or infinite.
    #[error("objective {axis} of individual {index} is not finite")]
    NonFiniteObjective {
        /// Index of the offending individual.
        index: usize,
        /// Objective axis.
        axis: usize,
    },

    /// A configuration value cannot be used.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Random source cannot provide a value required to continue niching.
    #[error("random source is exhausted: cannot choose one of {choices} options")]
    RandomSourceExhausted {
        /// Amount of options to choose from.
        choices: usize,
    },

    /// Random source has returned a value outside of requested range.
    #[error("random source returned {value} which is outside of [0, {max}]")]
    RandomOutOfRange {
        /// Returned value.
        value: i32,
        /// Max value (inclusive) which was requested.
        max: i32,
    },

    /// Cannot read or write data.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Cannot (de)serialize data.
    #[error("format error: {0}")]
    Format(#[from] serde_json::Error),
}

/// A type alias for result type with `SelectionError`.
pub type SelectionResult<T> = Result<T, SelectionError>;

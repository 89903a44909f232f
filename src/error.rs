//! Error types for factor evaluation.

use thiserror::Error;

use crate::types::ColumnId;

/// Result type for factor evaluation.
pub type Result<T> = std::result::Result<T, FactorError>;

/// Errors raised while resolving and validating an evaluator configuration.
///
/// Configuration is resolved once, at construction; a `ConfigError` means the
/// evaluator was never built and no evaluation ran.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Window length resolved to zero
    #[error("window length must be a positive integer, got {0}")]
    InvalidWindowLength(usize),

    /// Neither the configuration nor the reduction supplied a window length
    #[error("no window length configured and reduction `{0}` declares no default")]
    UnspecifiedWindowLength(String),

    /// No input columns were configured and the reduction declares no defaults
    #[error("at least one input column must be configured")]
    NoInputs,

    /// Reduction arity does not match the number of configured columns
    #[error(
        "reduction `{reduction}` takes {expected} input(s), but {actual} column(s) are configured"
    )]
    ArityMismatch {
        /// Name of the reduction
        reduction: String,
        /// Arity declared by the reduction
        expected: usize,
        /// Number of configured input columns
        actual: usize,
    },
}

/// Errors raised when a delivered window does not match the configuration.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// Wrong number of windows for the configured input columns
    #[error("expected {expected} window(s), one per input column, got {actual}")]
    WindowCount {
        /// Number of configured input columns
        expected: usize,
        /// Number of windows delivered
        actual: usize,
    },

    /// Window row count does not equal the configured window length
    #[error("window for column `{column}` has {actual} row(s), expected window length {expected}")]
    RowCount {
        /// Column the window was delivered for
        column: ColumnId,
        /// Configured window length
        expected: usize,
        /// Delivered row count
        actual: usize,
    },

    /// Window column count does not equal the current entity count
    #[error("window for column `{column}` covers {actual} entities, expected {expected}")]
    EntityCount {
        /// Column the window was delivered for
        column: ColumnId,
        /// Number of entities supplied by the caller
        expected: usize,
        /// Delivered column count
        actual: usize,
    },

    /// Ragged rows passed to a window constructor
    #[error("window row {row} has {actual} value(s), expected {expected}")]
    RaggedRows {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },
}

/// A reduction failed while computing its statistic.
///
/// Built-in reductions never fail; this exists for caller-supplied
/// reductions that hit conditions they do not guard against.
#[derive(Debug, Error)]
#[error("reduction `{reduction}` failed: {reason}")]
pub struct ComputationError {
    /// Name of the reduction that failed
    pub reduction: String,
    /// Human-readable failure description
    pub reason: String,
}

/// Top-level error type for factor evaluation.
///
/// All errors surface immediately to the caller for the affected evaluation
/// date; a failed call produces no result and the external engine decides
/// whether to skip, abort, or retry that date.
#[derive(Debug, Error)]
pub enum FactorError {
    /// Bad construction arguments
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Malformed window delivered by the caller
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// The reduction failed during evaluation
    #[error(transparent)]
    Computation(#[from] ComputationError),

    /// The reduction left an output position unpopulated
    #[error("reduction `{reduction}` left output position {index} unpopulated")]
    Unpopulated {
        /// Name of the reduction
        reduction: String,
        /// Output position that was never written
        index: usize,
    },
}

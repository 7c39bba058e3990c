//! Error types for the layout analysis library.
//!
//! The analysis itself is total over well-formed input: empty pages yield
//! empty output and degenerate geometry yields zero heights. Errors arise
//! only from configuration misuse and from the I/O boundary of the
//! inspection binary.

/// Result type alias for layout analysis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during configuration validation and I/O.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A heading threshold that cannot fire (must be strictly above 1.0)
    #[error("invalid {name}: {value} (heading thresholds must be greater than 1.0)")]
    InvalidThreshold {
        /// Name of the offending configuration field
        name: &'static str,
        /// Value that was rejected
        value: f32,
    },

    /// H2 threshold at or above the H1 threshold
    ///
    /// The H1 rule is checked first and wins ties, so an H2 threshold at or
    /// above the H1 threshold produces a rule that can never fire.
    #[error("h2_threshold ({h2}) must be below h1_threshold ({h1})")]
    ThresholdOrder {
        /// Configured H1 threshold
        h1: f32,
        /// Configured H2 threshold
        h2: f32,
    },

    /// Indent tolerance outside the unit interval
    #[error("indent_tolerance must be within [0, 1], got {0}")]
    InvalidIndentTolerance(f32),

    /// Non-positive paragraph merge gap
    #[error("paragraph_merge_gap must be positive, got {0}")]
    InvalidMergeGap(f32),

    /// Column clustering requested with zero columns
    #[error("max_columns must be at least 1")]
    InvalidColumnCount,

    /// Cleanup pattern that failed to compile
    #[error("invalid cleanup pattern '{pattern}': {reason}")]
    InvalidCleanupPattern {
        /// The pattern as supplied in the configuration
        pattern: String,
        /// Compile error reported by the regex engine
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

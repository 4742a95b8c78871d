//! Error types for circular computations.

use thiserror::Error;

/// Errors that can occur while embedding, averaging or selecting on a cycle.
///
/// Numeric payloads are rendered to strings so the error stays independent of
/// the scalar type the computation ran with.
#[derive(Debug, Error)]
pub enum CircularError {
    /// The period was zero, negative or not finite; the embedding is undefined.
    #[error("period must be finite and positive, got {0}")]
    InvalidPeriod(String),

    /// Two cyclic values with different periods were combined.
    #[error("period mismatch: {left} vs {right}")]
    PeriodMismatch { left: String, right: String },

    /// A mean or a selection was requested over zero elements.
    #[error("input collection is empty")]
    EmptyInput,

    /// An interval whose start and end coincide on the cycle.
    #[error("interval [{start}, {end}) is empty on this cycle")]
    EmptyInterval { start: String, end: String },

    /// A comparison threshold was negative or not finite.
    #[error("threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(String),

    /// The configuration file could not be read.
    #[error("failed to read config: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// The configuration file is not valid TOML for [`crate::config::Config`].
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

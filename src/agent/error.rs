//! Error types for agent construction and stepping.
//!
//! Out-of-range indices are programming errors and fail fast via panics in
//! the memory layer; they never surface as `AgentError` values.

use thiserror::Error;

/// Errors surfaced at the agent boundary.
#[derive(Error, Debug)]
pub enum AgentError {
    /// A configuration value is out of its documented range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configured variant exists as a design slot but has no behavior.
    /// Rejected at construction so it cannot silently act as the default.
    #[error("{0} is not implemented")]
    UnimplementedPolicy(&'static str),

    /// Reward must be a finite real number.
    #[error("reward must be finite, got {0}")]
    InvalidReward(f64),

    /// Journal I/O failure.
    #[error("journal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

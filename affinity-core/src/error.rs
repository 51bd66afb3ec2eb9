//! Structured error types for the affinity workspace.

use thiserror::Error;

/// Unified error type for all affinity operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AffinityError {
    /// Invalid input (alphabet mismatch, unknown residue symbols, bad arguments)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A scoring matrix was asked to score a residue pair it does not cover
    #[error("{alphabet} scoring matrix has no score for ({a}, {b})")]
    IncompleteScoringMatrix {
        /// Name of the residue alphabet.
        alphabet: &'static str,
        /// Query-side residue symbol.
        a: char,
        /// Subject-side residue symbol.
        b: char,
    },

    /// Parse error (malformed matrix text)
    #[error("parse error: {0}")]
    Parse(String),

    /// The caller aborted a running computation
    #[error("alignment cancelled")]
    Cancelled,
}

/// Convenience alias used throughout the affinity crates.
pub type Result<T> = std::result::Result<T, AffinityError>;

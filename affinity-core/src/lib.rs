//! Shared primitives for the affinity alignment workspace.
//!
//! `affinity-core` is the foundation the other affinity crates build on:
//!
//! - **Error types**: [`AffinityError`] and [`Result`] for structured error handling
//! - **Traits**: [`Scored`] and [`Summarizable`], implemented by sequences and alignments

pub mod error;
pub mod traits;

pub use error::{AffinityError, Result};
pub use traits::*;

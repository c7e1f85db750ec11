#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Error types for the depsolver dependency resolver.
//!
//! Organized by domain, one module per pipeline stage, aggregated into a
//! single [`Error`] for cross-crate boundaries.

pub mod parse;
pub mod resolve;
pub mod solver;

pub use parse::ParseError;
pub use resolve::ResolveError;
pub use solver::SolverError;

use thiserror::Error;

/// Top-level error type for the depsolver pipeline.
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("resolution error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("solver error: {0}")]
    Solver(#[from] SolverError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an internal error with a message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type alias for depsolver operations.
pub type Result<T> = std::result::Result<T, Error>;

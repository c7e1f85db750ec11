//! Errors raised while invoking the external Max-SAT solver.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum SolverError {
    #[error("failed to spawn solver binary {binary}: {message}")]
    Spawn { binary: String, message: String },

    #[error("failed to write WCNF instance to {path}: {message}")]
    WriteInstance { path: String, message: String },

    #[error("solver produced no assignment line (UNSATISFIABLE or failed); stdout: {stdout}, stderr: {stderr}")]
    NoAssignment { stdout: String, stderr: String },
}

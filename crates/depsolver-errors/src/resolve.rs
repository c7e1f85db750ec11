//! Errors raised while resolving constraints into a target state.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ResolveError {
    /// The Max-SAT formula has no model: no combination of installs and
    /// uninstalls satisfies every hard clause.
    #[error("no solution satisfies the given constraints")]
    Infeasible,

    /// Post-solve sanity check failed: a package the solver selected for
    /// install has a dependency disjunction witnessed by nothing reachable.
    /// Indicates an encoder or solver bug, never a legitimate input.
    #[error("package {package} has unsatisfied dependency after solving")]
    UnsatisfiedDependency { package: String },

    /// Install-side topological sort could not make progress because every
    /// remaining candidate package has at least one edge back into the
    /// current frontier, and the bounded recovery loop exhausted its
    /// iteration budget without finding an acyclic solution.
    #[error("cycle recovery exhausted after {iterations} iterations")]
    CycleRecoveryExhausted { iterations: u32 },

    /// The uninstall-ordering graph contains a cycle: two or more packages
    /// slated for uninstall depend on each other. Unlike an install-side
    /// cycle, there's no recovery loop for this — the solver has already
    /// committed to uninstalling all of them, so there's no alternative
    /// assignment to re-solve for.
    #[error("packages slated for uninstall form a dependency cycle and cannot be ordered")]
    UnorderableUninstalls,
}

#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! The depsolver pipeline core: constraint resolution, Weighted Partial
//! Max-SAT encoding, external solver invocation, delta computation, and
//! command sequencing with cycle recovery.

pub mod delta;
pub mod parser;
pub mod resolve;
pub mod sat;
pub mod sequencer;
pub mod solver_driver;

use depsolver_errors::{Error, ResolveError, Result};
use sequencer::InstallOrder;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

/// Run the full pipeline — parse, resolve, encode, solve (with cycle
/// recovery), sequence — and return the final command list.
///
/// # Errors
///
/// Returns an [`Error`] for any fatal condition described in spec §7:
/// malformed input, solver failure, infeasibility, an inconsistent
/// post-solve dependency, or cycle-recovery exhaustion.
pub fn run(
    repository_path: impl AsRef<Path>,
    initial_path: impl AsRef<Path>,
    constraints_path: impl AsRef<Path>,
    solver_binary: &str,
    max_cycle_iterations: u32,
) -> Result<Vec<String>> {
    let parsed = parser::parse_all(repository_path, initial_path, constraints_path)?;
    let mut repository = parsed.repository;
    resolve::resolve(&mut repository);

    info!(
        packages = repository.len(),
        initial = parsed.initial.len(),
        install = parsed.install.len(),
        uninstall = parsed.uninstall.len(),
        "resolved constraints"
    );

    let mut formula = sat::encode(&repository, &parsed.initial, &parsed.install, &parsed.uninstall);
    let mut iterations = 0u32;

    loop {
        debug!(clauses = formula.clauses.len(), iteration = iterations, "encoding ready");

        let assignment = match solver_driver::invoke(solver_binary, &formula) {
            Ok(assignment) => assignment,
            Err(depsolver_errors::SolverError::NoAssignment { stdout, .. })
                if stdout.contains("UNSATISFIABLE") =>
            {
                return Err(Error::Resolve(ResolveError::Infeasible));
            }
            Err(err) => return Err(Error::Solver(err)),
        };

        let delta = delta::compute(&parsed.initial, &assignment);
        let kept_initial: HashSet<usize> = parsed
            .initial
            .iter()
            .copied()
            .filter(|index| !delta.to_uninstall.contains(index))
            .collect();

        match sequencer::order_installs(&repository, &delta.to_install, &kept_initial)? {
            InstallOrder::Ordered(install_order) => {
                let uninstall_order =
                    sequencer::order_uninstalls(&repository, &delta.to_uninstall)?;
                return Ok(sequencer::format_commands(
                    &repository,
                    &uninstall_order,
                    &install_order,
                ));
            }
            InstallOrder::Cycle => {
                iterations += 1;
                if iterations > max_cycle_iterations {
                    return Err(Error::Resolve(ResolveError::CycleRecoveryExhausted {
                        iterations,
                    }));
                }
                warn!(iterations, "install-side cycle detected, blocking and re-solving");
                sat::block_install_set(&mut formula, &repository, &delta.to_install);
            }
        }
    }
}

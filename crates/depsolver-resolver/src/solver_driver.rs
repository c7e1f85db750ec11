//! Solver Driver (spec §4.4): writes the WCNF instance to a scratch file,
//! invokes the external Max-SAT solver as a subprocess, and parses its
//! assignment.

use crate::sat::{write_wcnf, Formula, Literal};
use depsolver_errors::SolverError;
use std::process::Command;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// The solver's assignment, partitioned into repository indices.
#[derive(Debug, Clone, Default)]
pub struct Assignment {
    pub selected: Vec<usize>,
    pub unselected: Vec<usize>,
}

/// Parse the signed-integer literals out of every `v`-prefixed stdout line.
/// Solvers commonly split one assignment across several `v` lines and
/// terminate it with a sentinel `0`; both are tolerated.
fn parse_assignment_literals(stdout: &str) -> Option<Vec<i64>> {
    let mut literals = Vec::new();
    let mut found = false;

    for line in stdout.lines() {
        let Some(rest) = line.strip_prefix('v') else {
            continue;
        };
        found = true;
        for token in rest.split_whitespace() {
            match token.parse::<i64>() {
                Ok(0) | Err(_) => {}
                Ok(value) => literals.push(value),
            }
        }
    }

    found.then_some(literals)
}

/// Write `formula` to a scratch file and invoke `solver_binary` on it,
/// returning the parsed assignment.
///
/// A non-zero exit code is tolerated as long as a usable `v` line is present
/// (optimisation solvers often exit non-zero on interrupt, spec §6).
///
/// # Errors
///
/// Returns [`SolverError`] if the scratch file cannot be written, the
/// solver binary cannot be spawned, or its stdout carries no `v` line.
pub fn invoke(solver_binary: &str, formula: &Formula) -> Result<Assignment, SolverError> {
    let mut scratch = NamedTempFile::new().map_err(|err| SolverError::WriteInstance {
        path: "<tempfile>".to_string(),
        message: err.to_string(),
    })?;

    write_wcnf(formula, &mut scratch).map_err(|err| SolverError::WriteInstance {
        path: scratch.path().display().to_string(),
        message: err.to_string(),
    })?;

    debug!(binary = solver_binary, clauses = formula.clauses.len(), "invoking solver");

    let output = Command::new(solver_binary)
        .arg(scratch.path())
        .output()
        .map_err(|err| SolverError::Spawn {
            binary: solver_binary.to_string(),
            message: err.to_string(),
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        warn!(status = ?output.status, "solver exited non-zero; checking for a usable assignment");
    }

    let Some(literals) = parse_assignment_literals(&stdout) else {
        return Err(SolverError::NoAssignment { stdout, stderr });
    };

    let mut assignment = Assignment::default();
    for raw in literals {
        let literal = Literal::from_dimacs(raw);
        let index = (literal.variable().sat_id() - 1) as usize;
        if literal.is_positive() {
            assignment.selected.push(index);
        } else {
            assignment.unselected.push(index);
        }
    }

    Ok(assignment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_v_line() {
        let literals = parse_assignment_literals("c comment\nv 1 -2 3 0\no 5\ns OPTIMUM FOUND\n");
        assert_eq!(literals, Some(vec![1, -2, 3]));
    }

    #[test]
    fn concatenates_split_v_lines() {
        let literals = parse_assignment_literals("v 1 -2\nv 3 0\n");
        assert_eq!(literals, Some(vec![1, -2, 3]));
    }

    #[test]
    fn returns_none_without_a_v_line() {
        assert_eq!(parse_assignment_literals("s UNSATISFIABLE\n"), None);
    }
}

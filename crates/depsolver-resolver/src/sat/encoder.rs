//! Weighted Partial Max-SAT encoding of the resolver problem (spec §4.3).

use super::clause::{WeightedClause, UNINSTALL_COST};
use super::types::{Literal, Variable};
use depsolver_types::{Constraint, Repository};

/// A Weighted Partial Max-SAT formula: hard clauses carry weight
/// [`MAX_WEIGHT`] and must be satisfied; soft clauses carry a lesser weight
/// and contribute to the objective.
#[derive(Debug, Clone, Default)]
pub struct Formula {
    pub num_variables: u32,
    pub clauses: Vec<WeightedClause>,
}

fn var_of(index: usize, repo: &Repository) -> Variable {
    Variable::new(repo.get(index).sat_id)
}

/// Build the base formula from a resolved repository, the initial state,
/// and the install/uninstall constraint lists.
///
/// Requires that [`depsolver_types::Package::dependencies`] and
/// [`depsolver_types::Package::conflicts`] have already been populated by
/// the constraint resolver.
///
/// # Panics
///
/// Panics if the repository holds more than `u32::MAX` packages.
#[must_use]
pub fn encode(
    repo: &Repository,
    initial: &[usize],
    install: &[Constraint],
    uninstall: &[Constraint],
) -> Formula {
    let mut clauses = Vec::new();

    // 1. Conflict clauses: for every ordered pair (P, Q) with Q in
    // P.conflicts, ¬x_P ∨ ¬x_Q.
    for package in repo.iter() {
        let p_var = Variable::new(package.sat_id);
        for &q_index in &package.conflicts {
            let q_var = var_of(q_index, repo);
            clauses.push(WeightedClause::hard(vec![
                Literal::negative(p_var),
                Literal::negative(q_var),
            ]));
        }
    }

    // 2. Dependency clauses: for every P and every resolved disjunction D,
    // ¬x_P ∨ ⋁_{Q∈D} x_Q.
    for package in repo.iter() {
        let p_var = Variable::new(package.sat_id);
        for disjunction in &package.dependencies {
            let mut literals = vec![Literal::negative(p_var)];
            literals.extend(
                disjunction
                    .iter()
                    .map(|&q_index| Literal::positive(var_of(q_index, repo))),
            );
            clauses.push(WeightedClause::hard(literals));
        }
    }

    // 3. Forced uninstall: ¬x_P for every package matching an uninstall
    // constraint.
    for constraint in uninstall {
        for index in repo.matching(constraint) {
            let var = var_of(index, repo);
            clauses.push(WeightedClause::hard(vec![Literal::negative(var)]));
        }
    }

    // 4. Forced install: ⋁_{P∈S} x_P for S = packages matching the
    // constraint. An install constraint matching nothing yields an empty
    // hard clause, which is unsatisfiable by construction — correctly
    // propagating to Infeasible.
    for constraint in install {
        let literals: Vec<Literal> = repo
            .matching(constraint)
            .into_iter()
            .map(|index| Literal::positive(var_of(index, repo)))
            .collect();
        clauses.push(WeightedClause::hard(literals));
    }

    // 5. Size cost (soft): not selecting P earns size(P).
    for package in repo.iter() {
        let var = Variable::new(package.sat_id);
        clauses.push(WeightedClause::soft(package.size, vec![Literal::negative(var)]));
    }

    // 6. Keep-installed cost (soft): keeping P selected earns UNINSTALL_COST.
    for &index in initial {
        let var = var_of(index, repo);
        clauses.push(WeightedClause::soft(
            UNINSTALL_COST,
            vec![Literal::positive(var)],
        ));
    }

    Formula {
        num_variables: u32::try_from(repo.len()).expect("package count fits in u32"),
        clauses,
    }
}

/// Append a blocking clause forbidding the exact set of currently-selected
/// install candidates, used by the cycle-recovery loop (spec §4.6):
/// `⋁_{P∈A} ¬x_P`, weight [`MAX_WEIGHT`].
pub fn block_install_set(formula: &mut Formula, repo: &Repository, to_install: &[usize]) {
    let literals = to_install
        .iter()
        .map(|&index| Literal::negative(var_of(index, repo)))
        .collect();
    formula.clauses.push(WeightedClause::hard(literals));
}

//! Sequencer (spec §4.6): topological ordering of the install/uninstall sets
//! and final command-list assembly. Cycle recovery on the install side is
//! orchestrated by the caller (see [`crate::run`]), which owns the
//! solve/re-solve loop; this module only detects a cycle and reports it.

use depsolver_errors::ResolveError;
use depsolver_types::Repository;
use std::collections::{HashMap, HashSet};

fn sat_id_of(index: usize, repo: &Repository) -> u32 {
    repo.get(index).sat_id
}

fn insert_sorted(queue: &mut Vec<usize>, node: usize, repo: &Repository) {
    let sat_id = sat_id_of(node, repo);
    let pos = queue.partition_point(|&n| sat_id_of(n, repo) < sat_id);
    queue.insert(pos, node);
}

/// Kahn's algorithm with an ascending-`sat_id` tie-break: repeatedly remove
/// the smallest zero-indegree node, appending it to the output, maintaining
/// the ready queue in sorted order via binary insertion. Returns `None` if
/// the graph contains a cycle (fewer than all nodes were produced).
fn kahn_order(repo: &Repository, edges: &HashMap<usize, Vec<usize>>) -> Option<Vec<usize>> {
    let mut indegree: HashMap<usize, usize> = edges.keys().map(|&node| (node, 0)).collect();
    for successors in edges.values() {
        for &successor in successors {
            *indegree.entry(successor).or_insert(0) += 1;
        }
    }

    let mut ready: Vec<usize> = indegree
        .iter()
        .filter(|&(_, &degree)| degree == 0)
        .map(|(&node, _)| node)
        .collect();
    ready.sort_by_key(|&node| sat_id_of(node, repo));

    let mut output = Vec::with_capacity(indegree.len());
    while !ready.is_empty() {
        let node = ready.remove(0);
        output.push(node);
        if let Some(successors) = edges.get(&node) {
            for &successor in successors {
                let degree = indegree.get_mut(&successor).expect("successor is tracked");
                *degree -= 1;
                if *degree == 0 {
                    insert_sorted(&mut ready, successor, repo);
                }
            }
        }
    }

    (output.len() == indegree.len()).then_some(output)
}

/// Outcome of attempting to topologically order the install set.
pub enum InstallOrder {
    Ordered(Vec<usize>),
    Cycle,
}

/// Build the install-ordering graph and run Kahn's algorithm over it.
///
/// For each `P` in `to_install` and each of its resolved dependency
/// disjunctions: if any witness already survives in `kept_initial` (the
/// initial state minus what's being uninstalled), the disjunction needs no
/// edge; otherwise the first disjunct also in `to_install` gets an edge into
/// `P`. A disjunction satisfied by neither is an encoder/solver
/// inconsistency, not a cycle, and is reported as
/// [`ResolveError::UnsatisfiedDependency`].
///
/// # Errors
///
/// Returns [`ResolveError::UnsatisfiedDependency`] if some disjunction has no
/// witness anywhere in the target state.
pub fn order_installs<S: std::hash::BuildHasher>(
    repo: &Repository,
    to_install: &[usize],
    kept_initial: &HashSet<usize, S>,
) -> Result<InstallOrder, ResolveError> {
    let to_install_set: HashSet<usize> = to_install.iter().copied().collect();
    let mut edges: HashMap<usize, Vec<usize>> =
        to_install.iter().map(|&index| (index, Vec::new())).collect();

    for &p in to_install {
        let package = repo.get(p);
        for disjunction in &package.dependencies {
            if disjunction.iter().any(|witness| kept_initial.contains(witness)) {
                continue;
            }
            let Some(&q) = disjunction.iter().find(|witness| to_install_set.contains(witness))
            else {
                return Err(ResolveError::UnsatisfiedDependency {
                    package: package.to_string(),
                });
            };
            edges.entry(q).or_default().push(p);
        }
    }

    Ok(match kahn_order(repo, &edges) {
        Some(order) => InstallOrder::Ordered(order),
        None => InstallOrder::Cycle,
    })
}

/// Build the uninstall-ordering graph (`Q → P` when `Q` is a dependency
/// witness of `P` and both are being uninstalled), run Kahn's, then reverse:
/// a package must be uninstalled before the things it depended on.
///
/// # Errors
///
/// Returns [`ResolveError::UnorderableUninstalls`] if the uninstall-side
/// graph itself contains a cycle. This can happen on otherwise-satisfiable
/// input: mutually-dependent packages that both survive solving as
/// unselected produce a 2-cycle here even though nothing about the original
/// state was inconsistent. Cycle recovery (spec §4.6) only ever targets the
/// install side, so this has no re-solve loop to fall back on.
pub fn order_uninstalls(
    repo: &Repository,
    to_uninstall: &[usize],
) -> Result<Vec<usize>, ResolveError> {
    let set: HashSet<usize> = to_uninstall.iter().copied().collect();
    let mut edges: HashMap<usize, Vec<usize>> =
        to_uninstall.iter().map(|&index| (index, Vec::new())).collect();

    for &p in to_uninstall {
        let package = repo.get(p);
        for disjunction in &package.dependencies {
            for &q in disjunction {
                if set.contains(&q) {
                    edges.entry(q).or_default().push(p);
                }
            }
        }
    }

    let mut order = kahn_order(repo, &edges).ok_or(ResolveError::UnorderableUninstalls)?;
    order.reverse();
    Ok(order)
}

/// Assemble the final command list: `-`-prefixed uninstalls (in uninstall
/// order) followed by `+`-prefixed installs (in install order).
#[must_use]
pub fn format_commands(
    repo: &Repository,
    uninstall_order: &[usize],
    install_order: &[usize],
) -> Vec<String> {
    uninstall_order
        .iter()
        .map(|&index| format!("-{}", repo.get(index)))
        .chain(install_order.iter().map(|&index| format!("+{}", repo.get(index))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use depsolver_types::{Constraint, Version};
    use std::str::FromStr;

    fn version(s: &str) -> Version {
        Version::from_str(s).unwrap()
    }

    fn constraint(s: &str) -> Constraint {
        Constraint::from_str(s).unwrap()
    }

    #[test]
    fn orders_dependency_chain() {
        // C(0), B(1, deps [[C]]), A(2, deps [[B]])
        let mut repo = Repository::new();
        repo.register("C".into(), version("1"), 1, vec![], vec![]);
        repo.register(
            "B".into(),
            version("1"),
            1,
            vec![vec![constraint("C")]],
            vec![],
        );
        repo.register(
            "A".into(),
            version("1"),
            1,
            vec![vec![constraint("B")]],
            vec![],
        );
        crate::resolve::resolve(&mut repo);

        let to_install = vec![0, 1, 2];
        let order = order_installs(&repo, &to_install, &HashSet::new()).unwrap();
        match order {
            InstallOrder::Ordered(order) => assert_eq!(order, vec![0, 1, 2]),
            InstallOrder::Cycle => panic!("expected an order"),
        }
    }

    #[test]
    fn kept_initial_witness_removes_the_edge() {
        let mut repo = Repository::new();
        repo.register("B".into(), version("1"), 1, vec![], vec![]);
        repo.register(
            "A".into(),
            version("1"),
            1,
            vec![vec![constraint("B")]],
            vec![],
        );
        crate::resolve::resolve(&mut repo);

        let kept = HashSet::from([0]);
        let order = order_installs(&repo, &[1], &kept).unwrap();
        match order {
            InstallOrder::Ordered(order) => assert_eq!(order, vec![1]),
            InstallOrder::Cycle => panic!("expected an order"),
        }
    }

    #[test]
    fn uninstall_order_is_reverse_of_dependency_order() {
        let mut repo = Repository::new();
        repo.register("B".into(), version("1"), 1, vec![], vec![]);
        repo.register(
            "A".into(),
            version("1"),
            1,
            vec![vec![constraint("B")]],
            vec![],
        );
        crate::resolve::resolve(&mut repo);

        let order = order_uninstalls(&repo, &[0, 1]).unwrap();
        assert_eq!(order, vec![1, 0]);
    }

    #[test]
    fn detects_uninstall_side_cycle() {
        let mut repo = Repository::new();
        repo.register(
            "A".into(),
            version("1"),
            1,
            vec![vec![constraint("B")]],
            vec![],
        );
        repo.register(
            "B".into(),
            version("1"),
            1,
            vec![vec![constraint("A")]],
            vec![],
        );
        crate::resolve::resolve(&mut repo);

        let err = order_uninstalls(&repo, &[0, 1]).unwrap_err();
        assert!(matches!(err, ResolveError::UnorderableUninstalls));
    }

    #[test]
    fn detects_install_side_cycle() {
        let mut repo = Repository::new();
        repo.register(
            "A".into(),
            version("1"),
            1,
            vec![vec![constraint("B")]],
            vec![],
        );
        repo.register(
            "B".into(),
            version("1"),
            1,
            vec![vec![constraint("A")]],
            vec![],
        );
        crate::resolve::resolve(&mut repo);

        let order = order_installs(&repo, &[0, 1], &HashSet::new()).unwrap();
        assert!(matches!(order, InstallOrder::Cycle));
    }
}

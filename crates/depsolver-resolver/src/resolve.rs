//! Constraint Resolver (spec §4.2): expands each package's raw dependency
//! disjunctions and conflict constraints into concrete repository indices.

use depsolver_types::Repository;
use std::collections::HashSet;

/// Populate `dependencies` and `conflicts` on every package in `repository`.
///
/// For each raw dependency disjunction, collects every repository index
/// matching any atom, deduplicated in first-seen order, then removes indices
/// that also appear in the package's own conflict set (rationalisation). A
/// disjunction left empty by either step is dropped entirely.
pub fn resolve(repository: &mut Repository) {
    let len = repository.len();
    let mut resolved_conflicts = Vec::with_capacity(len);
    let mut resolved_dependencies = Vec::with_capacity(len);

    for index in 0..len {
        let package = repository.get(index);

        let conflicts: HashSet<usize> = package
            .conflict_constraints
            .iter()
            .flat_map(|constraint| repository.matching(constraint))
            .collect();

        let mut dependencies = Vec::new();
        for disjunction in &package.dependency_constraints {
            let mut candidates = Vec::new();
            for constraint in disjunction {
                for candidate in repository.matching(constraint) {
                    if !candidates.contains(&candidate) {
                        candidates.push(candidate);
                    }
                }
            }
            candidates.retain(|candidate| !conflicts.contains(candidate));
            if !candidates.is_empty() {
                dependencies.push(candidates);
            }
        }

        resolved_conflicts.push(conflicts);
        resolved_dependencies.push(dependencies);
    }

    for index in 0..len {
        let package = repository.get_mut(index);
        package.conflicts.clone_from(&resolved_conflicts[index]);
        package.dependencies = std::mem::take(&mut resolved_dependencies[index]);
    }
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
    fn deduplicates_and_preserves_first_seen_order() {
        let mut repo = Repository::new();
        repo.register("B".into(), version("1"), 1, vec![], vec![]);
        repo.register("C".into(), version("1"), 1, vec![], vec![]);
        // A depends on (B or C), with B listed twice.
        repo.register(
            "A".into(),
            version("1"),
            1,
            vec![vec![constraint("B"), constraint("B"), constraint("C")]],
            vec![],
        );

        resolve(&mut repo);
        let a = repo.get(2);
        assert_eq!(a.dependencies, vec![vec![0, 1]]);
    }

    #[test]
    fn drops_disjunction_matching_nothing() {
        let mut repo = Repository::new();
        repo.register(
            "A".into(),
            version("1"),
            1,
            vec![vec![constraint("Missing")]],
            vec![],
        );

        resolve(&mut repo);
        assert!(repo.get(0).dependencies.is_empty());
    }

    #[test]
    fn rationalisation_removes_conflicting_candidate_and_can_empty_disjunction() {
        let mut repo = Repository::new();
        repo.register("B".into(), version("1"), 1, vec![], vec![]);
        repo.register(
            "A".into(),
            version("1"),
            1,
            vec![vec![constraint("B")]],
            vec![constraint("B")],
        );

        resolve(&mut repo);
        let a = repo.get(1);
        assert_eq!(a.conflicts, HashSet::from([0]));
        assert!(a.dependencies.is_empty());
    }
}

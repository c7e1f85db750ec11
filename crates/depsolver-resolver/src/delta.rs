//! Delta Computer (spec §4.5): the install/uninstall sets implied by an
//! assignment relative to the initial state.

use crate::solver_driver::Assignment;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct Delta {
    pub to_install: Vec<usize>,
    pub to_uninstall: Vec<usize>,
}

/// `to_install = selected ∖ initial`, `to_uninstall = initial ∩ unselected`.
#[must_use]
pub fn compute(initial: &[usize], assignment: &Assignment) -> Delta {
    let initial_set: HashSet<usize> = initial.iter().copied().collect();
    let to_install = assignment
        .selected
        .iter()
        .copied()
        .filter(|index| !initial_set.contains(index))
        .collect();

    let unselected_set: HashSet<usize> = assignment.unselected.iter().copied().collect();
    let to_uninstall = initial
        .iter()
        .copied()
        .filter(|index| unselected_set.contains(index))
        .collect();

    Delta {
        to_install,
        to_uninstall,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtracts_initial_from_selected() {
        let assignment = Assignment {
            selected: vec![0, 1, 2],
            unselected: vec![3],
        };
        let delta = compute(&[1], &assignment);
        assert_eq!(delta.to_install, vec![0, 2]);
        assert!(delta.to_uninstall.is_empty());
    }

    #[test]
    fn intersects_initial_with_unselected() {
        let assignment = Assignment {
            selected: vec![0],
            unselected: vec![1, 2],
        };
        let delta = compute(&[1, 3], &assignment);
        assert_eq!(delta.to_uninstall, vec![1]);
    }
}

//! Concrete package versions and the repository that owns them.

use crate::constraint::Constraint;
use crate::version::Version;
use std::collections::HashSet;
use std::fmt;

/// A single disjunction of raw dependency alternatives (an atom becomes a
/// disjunction of one).
pub type RawDisjunction = Vec<Constraint>;

/// A concrete (name, version) package, as registered in a [`Repository`].
///
/// `dependencies` and `conflicts` start empty and are populated by the
/// constraint-resolver pass; until then only the raw `*_constraints` fields
/// are meaningful. `sat_id` is assigned once, at registration, and never
/// changes.
#[derive(Debug, Clone)]
pub struct Package {
    pub name: String,
    pub version: Version,
    pub size: u64,
    pub dependency_constraints: Vec<RawDisjunction>,
    pub conflict_constraints: Vec<Constraint>,

    /// Resolved dependency disjunctions, each a list of repository indices
    /// (0-based; `sat_id - 1`) of concrete versions satisfying one raw
    /// disjunction. Empty disjunctions are dropped during resolution, so
    /// every inner `Vec` here is non-empty.
    pub dependencies: Vec<Vec<usize>>,
    /// Resolved conflict set, as repository indices.
    pub conflicts: HashSet<usize>,

    pub sat_id: u32,
}

impl Package {
    #[must_use]
    pub fn index(&self) -> usize {
        (self.sat_id - 1) as usize
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.version)
    }
}

impl PartialEq for Package {
    fn eq(&self, other: &Self) -> bool {
        self.sat_id == other.sat_id
    }
}
impl Eq for Package {}

impl std::hash::Hash for Package {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.sat_id.hash(state);
    }
}

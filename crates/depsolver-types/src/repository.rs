//! The repository of available package versions.

use crate::constraint::Constraint;
use crate::package::{Package, RawDisjunction};
use crate::version::Version;
use std::collections::HashMap;

/// All known concrete package versions, flat-indexed by `sat_id - 1`.
///
/// The repository owns every [`Package`]; everything else (initial state,
/// dependency/conflict links) holds non-owning indices into it. Packages are
/// immutable once registered, except for the single post-parse resolution
/// pass that fills in `dependencies` and `conflicts`.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    packages: Vec<Package>,
    by_name: HashMap<String, Vec<usize>>,
}

impl Repository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new concrete package version, assigning it the next dense
    /// `sat_id` (1-based). Returns its repository index (`sat_id - 1`).
    ///
    /// # Panics
    ///
    /// Panics if the repository grows beyond `u32::MAX` packages.
    pub fn register(
        &mut self,
        name: String,
        version: Version,
        size: u64,
        dependency_constraints: Vec<RawDisjunction>,
        conflict_constraints: Vec<Constraint>,
    ) -> usize {
        let index = self.packages.len();
        let sat_id = u32::try_from(index + 1).expect("package count fits in u32");
        self.by_name.entry(name.clone()).or_default().push(index);
        self.packages.push(Package {
            name,
            version,
            size,
            dependency_constraints,
            conflict_constraints,
            dependencies: Vec::new(),
            conflicts: std::collections::HashSet::new(),
            sat_id,
        });
        index
    }

    #[must_use]
    pub fn get(&self, index: usize) -> &Package {
        &self.packages[index]
    }

    pub fn get_mut(&mut self, index: usize) -> &mut Package {
        &mut self.packages[index]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// All packages, in `sat_id` order.
    pub fn iter(&self) -> impl Iterator<Item = &Package> {
        self.packages.iter()
    }

    /// Indices of every version known for `name`, insertion order.
    #[must_use]
    pub fn versions_of(&self, name: &str) -> &[usize] {
        self.by_name.get(name).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn has_package(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Every repository index whose package satisfies `constraint`, in
    /// repository (insertion) order, deduplicated.
    #[must_use]
    pub fn matching(&self, constraint: &Constraint) -> Vec<usize> {
        self.versions_of(&constraint.name)
            .iter()
            .copied()
            .filter(|&i| constraint.matches(&self.packages[i]))
            .collect()
    }
}

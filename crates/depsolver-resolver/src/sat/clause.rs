//! Weighted clauses for the Partial Max-SAT formula.

use super::types::Literal;
use std::fmt;

/// Weight assigned to hard clauses. Chosen larger than any sum of soft
/// weights the encoder can produce in one instance, so hard clauses always
/// dominate the objective (spec §4.3: `MAX_WEIGHT = (10^6)^2`).
pub const MAX_WEIGHT: u64 = 1_000_000 * 1_000_000;

/// Soft penalty for uninstalling an originally-installed package. Chosen
/// larger than any practical sum of package sizes in one instance, so an
/// uninstall is only ever chosen when strictly necessary for feasibility
/// (spec §4.3: `UNINSTALL_COST = 10^6`).
pub const UNINSTALL_COST: u64 = 1_000_000;

/// A single weighted disjunction of literals.
#[derive(Debug, Clone)]
pub struct WeightedClause {
    pub weight: u64,
    pub literals: Vec<Literal>,
}

impl WeightedClause {
    #[must_use]
    pub fn hard(literals: Vec<Literal>) -> Self {
        Self {
            weight: MAX_WEIGHT,
            literals,
        }
    }

    #[must_use]
    pub fn soft(weight: u64, literals: Vec<Literal>) -> Self {
        Self { weight, literals }
    }
}

impl fmt::Display for WeightedClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lits: Vec<String> = self.literals.iter().map(ToString::to_string).collect();
        write!(f, "{} ({})", self.weight, lits.join(" ∨ "))
    }
}

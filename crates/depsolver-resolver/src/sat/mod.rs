//! Weighted Partial Max-SAT encoding: variables, clauses, the encoder, and
//! DIMACS WCNF serialisation.

pub mod clause;
pub mod encoder;
pub mod types;
pub mod wcnf;

pub use clause::{WeightedClause, MAX_WEIGHT, UNINSTALL_COST};
pub use encoder::{block_install_set, encode, Formula};
pub use types::{Literal, Variable};
pub use wcnf::write_wcnf;

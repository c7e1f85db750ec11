#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Data model for the depsolver dependency resolver: dotted-integer
//! versions, the raw constraint grammar, concrete package versions, and the
//! repository that owns them.

mod constraint;
mod package;
mod repository;
mod version;

pub use constraint::{Constraint, Relation};
pub use package::{Package, RawDisjunction};
pub use repository::Repository;
pub use version::Version;

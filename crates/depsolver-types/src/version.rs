//! Dotted-integer version numbers.
//!
//! Versions compare as sequences of integers, component by component, with
//! a shorter sequence ranking below a longer one that agrees on the common
//! prefix (`1.2` < `1.2.0` is false by this rule — `1.2` < `1.2.0` holds
//! because the shorter sequence runs out first; no implicit zero-padding is
//! performed). `Vec<u64>`'s derived `Ord` already implements exactly this,
//! so `Version` is a thin newtype over it.

use depsolver_errors::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version(Vec<u64>);

impl Version {
    #[must_use]
    pub fn components(&self) -> &[u64] {
        &self.0
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::InvalidVersion {
                input: s.to_string(),
            });
        }
        let mut components = Vec::new();
        for part in s.split('.') {
            let n: u64 = part.parse().map_err(|_| ParseError::InvalidVersion {
                input: s.to_string(),
            })?;
            components.push(n);
        }
        Ok(Self(components))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join("."))
    }
}

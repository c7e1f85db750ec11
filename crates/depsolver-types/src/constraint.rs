//! Raw constraint grammar: `name [(=|<|>|<=|>=) dotted-version]`.

use crate::version::Version;
use crate::Package;
use depsolver_errors::ParseError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Eq,
    Lt,
    Gt,
    Le,
    Ge,
}

impl Relation {
    #[must_use]
    pub fn matches(self, lhs: &Version, rhs: &Version) -> bool {
        match self {
            Self::Eq => lhs == rhs,
            Self::Lt => lhs < rhs,
            Self::Gt => lhs > rhs,
            Self::Le => lhs <= rhs,
            Self::Ge => lhs >= rhs,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Eq => "=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Le => "<=",
            Self::Ge => ">=",
        };
        write!(f, "{s}")
    }
}

fn constraint_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?P<name>[.+A-Za-z0-9-]+)(?:(?P<rel><=|>=|=|<|>)(?P<ver>[0-9]+(?:\.[0-9]+)*))?$")
            .expect("constraint grammar is a valid regex")
    })
}

/// A raw `(name, relation, version)` reference, matching zero or more
/// concrete package versions in a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub name: String,
    pub relation: Option<(Relation, Version)>,
}

impl Constraint {
    /// Check whether a concrete package satisfies this constraint.
    #[must_use]
    pub fn matches(&self, package: &Package) -> bool {
        if self.name != package.name {
            return false;
        }
        match &self.relation {
            None => true,
            Some((rel, version)) => rel.matches(&package.version, version),
        }
    }
}

impl FromStr for Constraint {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = constraint_regex()
            .captures(s)
            .ok_or_else(|| ParseError::InvalidConstraint {
                input: s.to_string(),
            })?;

        let name = caps["name"].to_string();

        let relation = match (caps.name("rel"), caps.name("ver")) {
            (Some(rel), Some(ver)) => {
                let relation = match rel.as_str() {
                    "=" => Relation::Eq,
                    "<" => Relation::Lt,
                    ">" => Relation::Gt,
                    "<=" => Relation::Le,
                    ">=" => Relation::Ge,
                    other => {
                        return Err(ParseError::InvalidConstraint {
                            input: other.to_string(),
                        })
                    }
                };
                let version =
                    Version::from_str(ver.as_str()).map_err(|_| ParseError::InvalidConstraint {
                        input: s.to_string(),
                    })?;
                Some((relation, version))
            }
            (None, None) => None,
            // The grammar makes these jointly present or jointly absent;
            // the regex cannot produce one without the other.
            _ => unreachable!("relation and version are captured by the same optional group"),
        };

        Ok(Self { name, relation })
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.relation {
            None => write!(f, "{}", self.name),
            Some((rel, version)) => write!(f, "{}{rel}{version}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_name() {
        let c = Constraint::from_str("A").unwrap();
        assert_eq!(c.name, "A");
        assert!(c.relation.is_none());
    }

    #[test]
    fn parses_each_relation() {
        for (input, expected) in [
            ("A=1", Relation::Eq),
            ("A<1", Relation::Lt),
            ("A>1", Relation::Gt),
            ("A<=1", Relation::Le),
            ("A>=1", Relation::Ge),
        ] {
            let c = Constraint::from_str(input).unwrap();
            assert_eq!(c.relation.unwrap().0, expected, "parsing {input}");
        }
    }

    #[test]
    fn parses_dotted_version_and_punctuation_in_name() {
        let c = Constraint::from_str("lib.foo+bar-baz>=1.2.10").unwrap();
        assert_eq!(c.name, "lib.foo+bar-baz");
        let (rel, version) = c.relation.unwrap();
        assert_eq!(rel, Relation::Ge);
        assert_eq!(version.to_string(), "1.2.10");
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!(Constraint::from_str("").is_err());
        assert!(Constraint::from_str("A==1").is_err());
        assert!(Constraint::from_str("A> ").is_err());
    }

    #[test]
    fn round_trips_through_display() {
        let c = Constraint::from_str("A>=1.2").unwrap();
        assert_eq!(c.to_string(), "A>=1.2");
        let bare = Constraint::from_str("A").unwrap();
        assert_eq!(bare.to_string(), "A");
    }
}

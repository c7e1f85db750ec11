//! Loads the three JSON input documents into a [`Repository`] plus initial
//! state and constraint lists (spec §4.1).

use depsolver_errors::ParseError;
use depsolver_types::{Constraint, Repository, Version};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

fn name_regex() -> &'static regex::Regex {
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| regex::Regex::new(r"^[.+A-Za-z0-9-]+$").expect("name grammar is valid"))
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDependsEntry {
    Atom(String),
    Group(Vec<String>),
}

#[derive(Debug, Deserialize)]
struct RawPackage {
    name: String,
    version: String,
    size: u64,
    #[serde(default)]
    depends: Vec<RawDependsEntry>,
    #[serde(default)]
    conflicts: Vec<String>,
}

/// The fully parsed, pre-resolution input: a populated [`Repository`] and
/// the three derived index/constraint lists.
#[derive(Debug)]
pub struct ParsedInput {
    pub repository: Repository,
    pub initial: Vec<usize>,
    pub install: Vec<Constraint>,
    pub uninstall: Vec<Constraint>,
}

fn read_to_string(path: &Path) -> Result<String, ParseError> {
    fs::read_to_string(path).map_err(|err| ParseError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}

fn parse_json<T: for<'de> Deserialize<'de>>(path: &Path, text: &str) -> Result<T, ParseError> {
    serde_json::from_str(text).map_err(|err| ParseError::Json {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}

fn validate_name(name: &str) -> Result<(), ParseError> {
    if name_regex().is_match(name) {
        Ok(())
    } else {
        Err(ParseError::InvalidName {
            input: name.to_string(),
        })
    }
}

fn parse_constraint(input: &str) -> Result<Constraint, ParseError> {
    Constraint::from_str(input)
}

/// Load the repository document and register every package.
fn load_repository(path: &Path) -> Result<Repository, ParseError> {
    let text = read_to_string(path)?;
    let raw: Vec<RawPackage> = parse_json(path, &text)?;

    let mut repository = Repository::new();
    for entry in raw {
        validate_name(&entry.name)?;
        let version = Version::from_str(&entry.version).map_err(|_| ParseError::InvalidVersion {
            input: entry.version.clone(),
        })?;

        let dependency_constraints = entry
            .depends
            .into_iter()
            .map(|raw_entry| match raw_entry {
                RawDependsEntry::Atom(atom) => Ok(vec![parse_constraint(&atom)?]),
                RawDependsEntry::Group(atoms) => {
                    atoms.iter().map(|atom| parse_constraint(atom)).collect()
                }
            })
            .collect::<Result<Vec<_>, ParseError>>()?;

        let conflict_constraints = entry
            .conflicts
            .iter()
            .map(|atom| parse_constraint(atom))
            .collect::<Result<Vec<_>, ParseError>>()?;

        repository.register(
            entry.name,
            version,
            entry.size,
            dependency_constraints,
            conflict_constraints,
        );
    }

    Ok(repository)
}

/// Load the initial-state document: each entry must resolve to exactly one
/// concrete repository version via the constraint grammar.
fn load_initial(path: &Path, repository: &Repository) -> Result<Vec<usize>, ParseError> {
    let text = read_to_string(path)?;
    let raw: Vec<String> = parse_json(path, &text)?;

    raw.iter()
        .map(|reference| {
            let constraint = parse_constraint(reference)?;
            let matches = repository.matching(&constraint);
            match matches.as_slice() {
                [index] => Ok(*index),
                _ => Err(ParseError::UnknownInitialReference {
                    reference: reference.clone(),
                }),
            }
        })
        .collect()
}

/// Load the constraints document: each entry is `+`/`-` prefixed. Uninstall
/// constraints matching nothing are fatal; install constraints may match
/// nothing (the solver will then report infeasibility, per spec §4.1).
fn load_constraints(
    path: &Path,
    repository: &Repository,
) -> Result<(Vec<Constraint>, Vec<Constraint>), ParseError> {
    let text = read_to_string(path)?;
    let raw: Vec<String> = parse_json(path, &text)?;

    let mut install = Vec::new();
    let mut uninstall = Vec::new();

    for entry in raw {
        let (direction, body) = entry.split_at_checked(1).ok_or_else(|| {
            ParseError::MissingDirectionPrefix {
                input: entry.clone(),
            }
        })?;

        match direction {
            "+" => install.push(parse_constraint(body)?),
            "-" => {
                let constraint = parse_constraint(body)?;
                if repository.matching(&constraint).is_empty() {
                    return Err(ParseError::UnknownUninstallReference {
                        reference: constraint.to_string(),
                    });
                }
                uninstall.push(constraint);
            }
            _ => {
                return Err(ParseError::MissingDirectionPrefix { input: entry });
            }
        }
    }

    Ok((install, uninstall))
}

/// Load all three input documents.
///
/// # Errors
///
/// Returns [`ParseError`] on I/O failure, malformed JSON, a malformed
/// constraint/version string, or an initial-state/uninstall reference that
/// matches no repository package.
pub fn parse_all(
    repository_path: impl AsRef<Path>,
    initial_path: impl AsRef<Path>,
    constraints_path: impl AsRef<Path>,
) -> Result<ParsedInput, ParseError> {
    let repository = load_repository(repository_path.as_ref())?;
    let initial = load_initial(initial_path.as_ref(), &repository)?;
    let (install, uninstall) = load_constraints(constraints_path.as_ref(), &repository)?;

    Ok(ParsedInput {
        repository,
        initial,
        install,
        uninstall,
    })
}

impl fmt::Display for ParsedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} packages, {} initial, {} install, {} uninstall",
            self.repository.len(),
            self.initial.len(),
            self.install.len(),
            self.uninstall.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_flat_and_grouped_depends() {
        let repo_file = write_temp(
            r#"[
                {"name":"A","version":"1","size":1,"depends":["B",["C","D"]]},
                {"name":"B","version":"1","size":1},
                {"name":"C","version":"1","size":1},
                {"name":"D","version":"1","size":1}
            ]"#,
        );
        let initial_file = write_temp("[]");
        let constraints_file = write_temp(r#"["+A"]"#);

        let parsed =
            parse_all(repo_file.path(), initial_file.path(), constraints_file.path()).unwrap();

        assert_eq!(parsed.repository.len(), 4);
        let a = parsed.repository.get(0);
        assert_eq!(a.dependency_constraints.len(), 2);
        assert_eq!(a.dependency_constraints[0].len(), 1);
        assert_eq!(a.dependency_constraints[1].len(), 2);
    }

    #[test]
    fn rejects_unknown_initial_reference() {
        let repo_file = write_temp(r#"[{"name":"A","version":"1","size":1}]"#);
        let initial_file = write_temp(r#"["B=1"]"#);
        let constraints_file = write_temp("[]");

        let err = parse_all(repo_file.path(), initial_file.path(), constraints_file.path())
            .unwrap_err();
        assert!(matches!(err, ParseError::UnknownInitialReference { .. }));
    }

    #[test]
    fn rejects_unknown_uninstall_reference() {
        let repo_file = write_temp(r#"[{"name":"A","version":"1","size":1}]"#);
        let initial_file = write_temp("[]");
        let constraints_file = write_temp(r#"["-B"]"#);

        let err = parse_all(repo_file.path(), initial_file.path(), constraints_file.path())
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnknownUninstallReference { .. }
        ));
    }

    #[test]
    fn allows_unmatched_install_constraint() {
        let repo_file = write_temp(r#"[{"name":"A","version":"1","size":1}]"#);
        let initial_file = write_temp("[]");
        let constraints_file = write_temp(r#"["+B"]"#);

        let parsed =
            parse_all(repo_file.path(), initial_file.path(), constraints_file.path()).unwrap();
        assert_eq!(parsed.install.len(), 1);
    }

    #[test]
    fn rejects_missing_direction_prefix() {
        let repo_file = write_temp("[]");
        let initial_file = write_temp("[]");
        let constraints_file = write_temp(r#"["A"]"#);

        let err = parse_all(repo_file.path(), initial_file.path(), constraints_file.path())
            .unwrap_err();
        assert!(matches!(err, ParseError::MissingDirectionPrefix { .. }));
    }
}

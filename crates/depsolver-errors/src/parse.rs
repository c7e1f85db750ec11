//! Errors raised while reading the repository, initial-state and
//! constraints documents.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ParseError {
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("malformed JSON in {path}: {message}")]
    Json { path: String, message: String },

    #[error("malformed constraint string: {input}")]
    InvalidConstraint { input: String },

    #[error("malformed package name: {input}")]
    InvalidName { input: String },

    #[error("malformed version: {input}")]
    InvalidVersion { input: String },

    #[error("initial-state entry references unknown package: {reference}")]
    UnknownInitialReference { reference: String },

    #[error("uninstall constraint references unknown package: {reference}")]
    UnknownUninstallReference { reference: String },

    #[error("constraint string missing +/- prefix: {input}")]
    MissingDirectionPrefix { input: String },
}

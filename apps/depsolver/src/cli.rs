//! Command line interface definition.

use clap::Parser;
use std::path::PathBuf;

/// Package-manager dependency resolver: reduces a repository, initial state
/// and constraint list to an ordered install/uninstall command sequence via
/// Weighted Partial Max-SAT.
#[derive(Parser)]
#[command(name = "depsolver")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Resolve package install/uninstall commands via Max-SAT")]
pub struct Cli {
    /// Path to the repository JSON document.
    pub repository: PathBuf,

    /// Path to the initial-state JSON document.
    pub initial: PathBuf,

    /// Path to the install/uninstall constraints JSON document.
    pub constraints: PathBuf,

    /// External Max-SAT solver binary, given a WCNF file path as its sole
    /// argument.
    #[arg(long, default_value = "maxhs")]
    pub solver: String,

    /// Maximum number of cycle-recovery re-solves before giving up.
    #[arg(long, default_value_t = 16)]
    pub max_cycle_iterations: u32,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub debug: bool,
}

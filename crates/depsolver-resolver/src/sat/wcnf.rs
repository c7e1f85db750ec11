//! DIMACS Weighted CNF serialisation (spec §4.3).

use super::clause::MAX_WEIGHT;
use super::encoder::Formula;
use std::io::{self, Write};

/// Write `formula` in DIMACS WCNF form: a `p wcnf V C W` header followed by
/// one `<weight> <literal>... 0` line per clause.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_wcnf<W: Write>(formula: &Formula, mut writer: W) -> io::Result<()> {
    writeln!(
        writer,
        "p wcnf {} {} {}",
        formula.num_variables,
        formula.clauses.len(),
        MAX_WEIGHT
    )?;

    for clause in &formula.clauses {
        write!(writer, "{}", clause.weight)?;
        for literal in &clause.literals {
            write!(writer, " {}", literal.to_dimacs())?;
        }
        writeln!(writer, " 0")?;
    }

    writer.flush()
}

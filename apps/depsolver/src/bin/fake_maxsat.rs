//! Minimal brute-force DIMACS WCNF solver, bundled only as test
//! infrastructure: a stand-in external solver for integration tests, since a
//! real Max-SAT binary cannot be assumed present in the build environment.
//! Not part of the production solving path, which always delegates to
//! whatever solver the operator configures via `--solver`.

use std::env;
use std::fs;
use std::process;

fn main() {
    let path = env::args().nth(1).expect("usage: fake_maxsat <wcnf-file>");
    let text = fs::read_to_string(&path).expect("failed to read WCNF file");

    let mut lines = text.lines().filter(|line| !line.starts_with('c'));
    let header = lines.next().expect("missing WCNF header line");
    let mut fields = header.split_whitespace();
    assert_eq!(fields.next(), Some("p"), "expected DIMACS header");
    assert_eq!(fields.next(), Some("wcnf"), "expected wcnf format");
    let num_vars: u32 = fields.next().expect("missing variable count").parse().expect("variable count");
    let _num_clauses: usize = fields.next().expect("missing clause count").parse().expect("clause count");
    let hard_weight: u64 = fields.next().expect("missing hard weight").parse().expect("hard weight");

    assert!(num_vars <= 24, "fake_maxsat only handles small test instances");

    let clauses: Vec<(u64, Vec<i64>)> = lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let mut tokens = line.split_whitespace();
            let weight: u64 = tokens.next().expect("clause weight").parse().expect("clause weight");
            let literals = tokens
                .map(|token| token.parse::<i64>().expect("literal"))
                .take_while(|&lit| lit != 0)
                .collect();
            (weight, literals)
        })
        .collect();

    let mut best: Option<(u64, u64)> = None;

    for assignment in 0u64..(1u64 << num_vars) {
        let holds = |var: u32| (assignment >> (var - 1)) & 1 == 1;

        let mut feasible = true;
        let mut total = 0u64;
        for (weight, literals) in &clauses {
            let satisfied = literals.iter().any(|&lit| {
                let var = u32::try_from(lit.unsigned_abs()).expect("variable fits in u32");
                holds(var) == (lit > 0)
            });
            if satisfied {
                total += weight;
            } else if *weight >= hard_weight {
                feasible = false;
                break;
            }
        }

        if feasible && best.is_none_or(|(_, best_total)| total > best_total) {
            best = Some((assignment, total));
        }
    }

    match best {
        Some((assignment, _)) => {
            let literals: Vec<String> = (1..=num_vars)
                .map(|var| {
                    if (assignment >> (var - 1)) & 1 == 1 {
                        var.to_string()
                    } else {
                        format!("-{var}")
                    }
                })
                .collect();
            println!("v {} 0", literals.join(" "));
            println!("s OPTIMUM FOUND");
        }
        None => {
            println!("s UNSATISFIABLE");
            process::exit(20);
        }
    }
}

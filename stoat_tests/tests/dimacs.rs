use stoat_sat::{
    config::{Config, EmptyClauseTreatment},
    reports::Report,
};

use stoat_tests::{cnf_lib_subdir, load_dimacs, silent_formula_report, silent_on_directory};

#[test]
fn satisfiable_directory() {
    let config = Config::default();
    let count = silent_on_directory(cnf_lib_subdir(vec!["sat"]), &config, Report::Satisfiable);
    assert_eq!(count, 3);
}

#[test]
fn unsatisfiable_directory() {
    let config = Config::default();
    let count = silent_on_directory(cnf_lib_subdir(vec!["unsat"]), &config, Report::Unsatisfiable);
    assert_eq!(count, 3);
}

#[test]
fn chain_forces_every_variable() {
    let config = Config::default();
    let path = cnf_lib_subdir(vec!["sat", "chain5.cnf"]);

    let mut ctx = load_dimacs(&path, &config).expect("failed to load chain5.cnf");
    assert!(ctx.solve().is_ok());
    assert_eq!(ctx.report(), Report::Satisfiable);

    for variable in 1..=5 {
        assert_eq!(ctx.value_of(variable), Some(Some(true)));
    }
}

#[test]
fn empty_clause_as_conflict() {
    // The default treatment stores the clause, and a conflict holds before any assignment.
    let config = Config::default();
    let path = cnf_lib_subdir(vec!["unsat", "empty_clause.cnf"]);

    let ctx = load_dimacs(&path, &config).expect("failed to load empty_clause.cnf");
    assert!(ctx.has_empty_clause());
}

#[test]
fn empty_clause_as_rejection() {
    let config = Config {
        empty_clause: EmptyClauseTreatment::Reject,
        ..Config::default()
    };
    let path = cnf_lib_subdir(vec!["unsat", "empty_clause.cnf"]);

    // The harness folds the rejection into an unsatisfiable report.
    assert_eq!(
        silent_formula_report(path, &config),
        Report::Unsatisfiable
    );
}

#[test]
fn declared_counts_are_validated() {
    use stoat_sat::context::Context;
    use stoat_sat::types::err::{self, BuildError};
    use std::io::Write;

    let mut dimacs = vec![];
    let _ = dimacs.write(b"p cnf 2 3\n1 2 0\n-1 -2 0\n");

    let result = Context::from_dimacs(dimacs.as_slice(), Config::default());
    assert_eq!(
        result.err(),
        Some(err::ErrorKind::from(BuildError::ClauseCountMismatch {
            declared: 3,
            found: 2
        }))
    );
}

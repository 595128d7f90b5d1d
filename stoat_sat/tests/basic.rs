use stoat_sat::{
    config::Config,
    context::Context,
    reports::Report,
    structures::{literal::Literal, valuation::Valuation},
};

fn context_from(variable_count: u32, clauses: Vec<Vec<isize>>) -> Context {
    let clause_count = clauses.len();
    let clauses = clauses
        .into_iter()
        .map(|ints| {
            ints.into_iter()
                .map(|int| Literal::from_int(int).expect("bad literal"))
                .collect()
        })
        .collect();
    Context::from_parts(variable_count, clause_count, clauses, Config::default())
        .expect("failed to build context")
}

mod basic {
    use super::*;

    #[test]
    fn one_literal() {
        let mut ctx = context_from(1, vec![vec![1]]);

        assert!(ctx.solve().is_ok());
        assert_eq!(ctx.report(), Report::Satisfiable);
        assert_eq!(ctx.value_of(1), Some(Some(true)));
    }

    #[test]
    fn one_negative_literal() {
        let mut ctx = context_from(1, vec![vec![-1]]);

        assert!(ctx.solve().is_ok());
        assert_eq!(ctx.report(), Report::Satisfiable);
        assert_eq!(ctx.value_of(1), Some(Some(false)));
    }

    #[test]
    fn conflict() {
        let mut ctx = context_from(2, vec![vec![1, 2], vec![-1, -2], vec![1, -2], vec![-1, 2]]);

        assert!(ctx.solve().is_ok());
        assert_eq!(ctx.report(), Report::Unsatisfiable);
    }

    #[test]
    fn contradictory_units() {
        // Clause 1 is satisfied by the decision on 1, clause 2 falsifies, and the flip mirrors.
        let mut ctx = context_from(1, vec![vec![1], vec![-1]]);

        assert!(ctx.solve().is_ok());
        assert_eq!(ctx.report(), Report::Unsatisfiable);

        // An unsatisfiable solve unwinds completely.
        assert_eq!(ctx.valuation().unvalued_variables().count(), 1);
    }

    #[test]
    fn forced_values() {
        let mut ctx = context_from(2, vec![vec![1, 2], vec![-1]]);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        assert_eq!(ctx.value_of(1), Some(Some(false)));
        assert_eq!(ctx.value_of(2), Some(Some(true)));
    }

    #[test]
    fn unknown_before_solve() {
        let ctx = context_from(1, vec![vec![1]]);
        assert_eq!(ctx.report(), Report::Unknown);
    }
}

mod construction {
    use stoat_sat::{
        config::EmptyClauseTreatment,
        types::err::{self, BuildError},
    };

    use super::*;

    #[test]
    fn clause_count_mismatch() {
        let clauses = vec![vec![Literal::new(1, true)]];
        let result = Context::from_parts(1, 2, clauses, Config::default());

        assert_eq!(
            result.err(),
            Some(err::ErrorKind::from(BuildError::ClauseCountMismatch {
                declared: 2,
                found: 1
            }))
        );
    }

    #[test]
    fn literal_out_of_range() {
        let clauses = vec![vec![Literal::new(1, true)], vec![Literal::new(3, false)]];
        let result = Context::from_parts(2, 2, clauses, Config::default());

        assert_eq!(
            result.err(),
            Some(err::ErrorKind::from(BuildError::LiteralOutOfRange {
                clause: 1,
                literal: -3
            }))
        );
    }

    #[test]
    fn empty_clause_rejected_when_configured() {
        let config = Config {
            empty_clause: EmptyClauseTreatment::Reject,
            ..Config::default()
        };

        let result = Context::from_parts(1, 2, vec![vec![Literal::new(1, true)], vec![]], config);

        assert_eq!(
            result.err(),
            Some(err::ErrorKind::from(BuildError::EmptyClause(1)))
        );
    }

    #[test]
    fn empty_clause_conflicts_by_default() {
        // A zero-length clause is vacuously empty, so a conflict holds before any assignment.
        let mut ctx = context_from(1, vec![vec![1], vec![]]);

        assert!(ctx.has_empty_clause());
        assert!(ctx.solve().is_ok());
        assert_eq!(ctx.report(), Report::Unsatisfiable);
    }
}

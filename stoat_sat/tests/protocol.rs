//! Tests of the assign/retract protocol: the round-trip law, frame maintenance, and contract checks.

use stoat_sat::{
    config::Config,
    context::Context,
    db::status::OccurrenceStatus,
    structures::{literal::Literal, valuation::Valuation},
    types::err::{self, ContractError},
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

/// The observable clause state of a context: frame membership (as a sorted vector), every status cell, and the valuation.
fn snapshot(ctx: &Context) -> (Vec<u32>, Vec<Vec<OccurrenceStatus>>, Vec<Option<bool>>) {
    let mut frame = ctx.frame_stack.top().to_vec();
    frame.sort_unstable();

    let cells = (0..ctx.clause_count() as u32)
        .map(|clause| ctx.status_db.clause_row(clause).to_vec())
        .collect();

    let valuation = ctx.valuation().values().collect();

    (frame, cells, valuation)
}

mod round_trip {
    use super::*;

    #[test]
    fn single_assignment() {
        let mut ctx = context_from(3, vec![vec![1, 2], vec![-1, 3], vec![-2, -3]]);

        let before = snapshot(&ctx);

        ctx.assign(1, true).unwrap();
        assert_ne!(before, snapshot(&ctx));

        ctx.retract(1).unwrap();
        assert_eq!(before, snapshot(&ctx));
    }

    #[test]
    fn nested_assignments() {
        let mut ctx = context_from(3, vec![vec![1, 2, 3], vec![-1, -2], vec![2, -3], vec![-1, 3]]);

        let depth_0 = snapshot(&ctx);

        ctx.assign(1, true).unwrap();
        let depth_1 = snapshot(&ctx);

        ctx.assign(2, false).unwrap();
        let depth_2 = snapshot(&ctx);

        ctx.assign(3, true).unwrap();

        ctx.retract(3).unwrap();
        assert_eq!(depth_2, snapshot(&ctx));

        ctx.retract(2).unwrap();
        assert_eq!(depth_1, snapshot(&ctx));

        ctx.retract(1).unwrap();
        assert_eq!(depth_0, snapshot(&ctx));
    }

    #[test]
    fn full_unwind_restores_everything() {
        let mut ctx = context_from(3, vec![vec![1, -2], vec![2, 3], vec![-1, -3], vec![-3]]);

        ctx.assign(1, true).unwrap();
        ctx.assign(2, true).unwrap();
        ctx.assign(3, false).unwrap();

        ctx.retract_all().unwrap();

        // The base frame holds every clause, and every cell and variable is unvalued.
        assert_eq!(ctx.frame_stack.top(), &[0, 1, 2, 3]);
        assert_eq!(ctx.frame_stack.depth(), 1);

        for clause in 0..ctx.clause_count() as u32 {
            for status in ctx.status_db.clause_row(clause) {
                assert_eq!(*status, OccurrenceStatus::Unvalued);
            }
        }

        assert_eq!(ctx.valuation().unvalued_variables().count(), 3);
    }

    #[test]
    fn retraction_clears_cells_of_inactive_clauses() {
        // Clause 0 is satisfied by the first assignment and so removed from the active view.
        // The second assignment still does not touch it, and the matching retraction must clear the cell the *first* assignment wrote.
        let mut ctx = context_from(2, vec![vec![1, 2], vec![-1, -2]]);

        ctx.assign(1, true).unwrap();
        ctx.assign(2, true).unwrap();

        assert_eq!(ctx.status_db.status(0, 1), OccurrenceStatus::Unvalued);

        ctx.retract(2).unwrap();
        ctx.retract(1).unwrap();

        assert_eq!(ctx.status_db.status(0, 0), OccurrenceStatus::Unvalued);
        assert_eq!(ctx.status_db.status(1, 0), OccurrenceStatus::Unvalued);
    }
}

mod frames {
    use super::*;

    #[test]
    fn satisfaction_removes_only_satisfied_clauses() {
        let mut ctx = context_from(2, vec![vec![1, 2], vec![-1, -2]]);

        ctx.assign(1, true).unwrap();

        assert_eq!(ctx.frame_stack.top(), &[1]);
        assert_eq!(ctx.status_db.status(0, 0), OccurrenceStatus::Satisfying);
        assert_eq!(ctx.status_db.status(1, 0), OccurrenceStatus::Falsified);
        assert!(!ctx.formula_satisfied());

        ctx.assign(2, false).unwrap();

        assert!(ctx.frame_stack.top().is_empty());
        assert!(ctx.formula_satisfied());
    }

    #[test]
    fn falsification_keeps_clauses_active() {
        let mut ctx = context_from(2, vec![vec![1], vec![-1]]);

        ctx.assign(1, true).unwrap();

        assert_eq!(ctx.frame_stack.top(), &[1]);
        assert!(ctx.clause_is_empty(1));
        assert!(ctx.has_empty_clause());
        assert!(!ctx.clause_is_empty(0));
    }

    #[test]
    fn duplicate_literals_in_one_clause() {
        // Every occurrence is marked, and the clause is removed once.
        let mut ctx = context_from(1, vec![vec![1, 1]]);

        ctx.assign(1, true).unwrap();

        assert!(ctx.formula_satisfied());
        assert_eq!(ctx.status_db.status(0, 0), OccurrenceStatus::Satisfying);
        assert_eq!(ctx.status_db.status(0, 1), OccurrenceStatus::Satisfying);

        ctx.retract(1).unwrap();
        assert_eq!(ctx.frame_stack.top(), &[0]);
    }

    #[test]
    fn complementary_occurrences_in_one_clause() {
        // A tautological clause is satisfied by either value, with the other occurrence falsified.
        let mut ctx = context_from(1, vec![vec![1, -1]]);

        ctx.assign(1, false).unwrap();

        assert!(ctx.formula_satisfied());
        assert_eq!(ctx.status_db.status(0, 0), OccurrenceStatus::Falsified);
        assert_eq!(ctx.status_db.status(0, 1), OccurrenceStatus::Satisfying);
        assert!(!ctx.clause_is_empty(0));
    }

    #[test]
    fn depth_tracks_assignments() {
        let mut ctx = context_from(2, vec![vec![1, 2]]);

        assert_eq!(ctx.frame_stack.depth(), 1);

        ctx.assign(1, false).unwrap();
        assert_eq!(ctx.frame_stack.depth(), 2);

        ctx.assign(2, false).unwrap();
        assert_eq!(ctx.frame_stack.depth(), 3);

        ctx.retract(2).unwrap();
        ctx.retract(1).unwrap();
        assert_eq!(ctx.frame_stack.depth(), 1);
    }
}

mod queries {
    use super::*;

    #[test]
    fn branch_variable_is_smallest_unvalued() {
        let mut ctx = context_from(3, vec![vec![1, 2, 3]]);

        assert_eq!(ctx.branch_variable(), Some(1));

        ctx.assign(1, false).unwrap();
        assert_eq!(ctx.branch_variable(), Some(2));

        ctx.assign(3, false).unwrap();
        assert_eq!(ctx.branch_variable(), Some(2));

        ctx.assign(2, false).unwrap();
        assert_eq!(ctx.branch_variable(), None);
    }

    #[test]
    fn empty_clause_scan_covers_inactive_clauses() {
        // Clause 0 is satisfied (and so inactive), clause 1 becomes empty underneath it.
        let mut ctx = context_from(2, vec![vec![1, 2], vec![-1]]);

        ctx.assign(1, true).unwrap();

        assert_eq!(ctx.frame_stack.top(), &[1]);
        assert!(ctx.has_empty_clause());
        assert!(!ctx.clause_is_empty(0));
    }
}

mod contract {
    use super::*;

    #[test]
    fn reassignment() {
        let mut ctx = context_from(2, vec![vec![1, 2]]);

        ctx.assign(1, true).unwrap();
        assert_eq!(
            ctx.assign(1, false),
            Err(err::ErrorKind::from(ContractError::Reassignment(1)))
        );

        // The refused call left the state untouched.
        assert_eq!(ctx.value_of(1), Some(Some(true)));
        assert_eq!(ctx.frame_stack.depth(), 2);
    }

    #[test]
    fn out_of_range() {
        let mut ctx = context_from(2, vec![vec![1, 2]]);

        assert_eq!(
            ctx.assign(3, true),
            Err(err::ErrorKind::from(ContractError::VariableOutOfRange(3)))
        );
        assert_eq!(
            ctx.assign(0, true),
            Err(err::ErrorKind::from(ContractError::VariableOutOfRange(0)))
        );
    }

    #[test]
    fn unassigned_retraction() {
        let mut ctx = context_from(2, vec![vec![1, 2]]);

        ctx.assign(1, true).unwrap();
        assert_eq!(
            ctx.retract(2),
            Err(err::ErrorKind::from(ContractError::UnassignedRetraction(2)))
        );
    }

    #[test]
    fn out_of_order_retraction() {
        let mut ctx = context_from(2, vec![vec![1, 2]]);

        ctx.assign(1, true).unwrap();
        ctx.assign(2, true).unwrap();

        assert_eq!(
            ctx.retract(1),
            Err(err::ErrorKind::from(ContractError::OutOfOrderRetraction(1)))
        );

        // The refused call left the state untouched.
        assert_eq!(ctx.frame_stack.depth(), 3);
        assert_eq!(ctx.value_of(1), Some(Some(true)));
    }

    #[test]
    fn base_frame_retraction() {
        let mut ctx = context_from(2, vec![vec![1, 2]]);

        assert_eq!(
            ctx.retract(1),
            Err(err::ErrorKind::from(ContractError::BaseFrame))
        );
    }
}

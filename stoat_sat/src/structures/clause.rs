//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use stoat_sat::structures::literal::Literal;
//! # use stoat_sat::structures::clause::Clause;
//! let clause = vec![Literal::new(23, true),
//!                   Literal::new(41, false),
//!                   Literal::new(3,  false)];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_dimacs(true), "23 -41 -3 0");
//!
//! let mut valuation = vec![None; 41];
//! valuation[22] = Some(false);
//! valuation[40] = Some(true);
//!
//! assert!(!clause.satisfied_on(&valuation));
//! assert!(!clause.unsatisfiable_on(&valuation));
//!
//! valuation[2] = Some(false);
//! assert!(clause.satisfied_on(&valuation));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause).

use crate::structures::{literal::Literal, valuation::Valuation, variable::Variable};

/// The canonical implementation of a clause.
pub type CClause = Vec<Literal>;

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, in stored order.
    fn literals(&self) -> impl Iterator<Item = &Literal>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all variables in the clause, in stored order.
    fn variables(&self) -> impl Iterator<Item = Variable>;

    /// True if some literal of the clause holds on the given valuation.
    fn satisfied_on(&self, valuation: &impl Valuation) -> bool;

    /// True if every literal of the clause conflicts with the given valuation.
    ///
    /// Vacuously true for the empty clause, on any valuation.
    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool;
}

impl Clause for [Literal] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::default();
        for literal in self {
            the_string.push_str(format!("{literal} ").as_str());
        }
        match zero {
            true => {
                the_string.push('0');
                the_string
            }
            false => the_string.trim_end().to_string(),
        }
    }

    fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn variables(&self) -> impl Iterator<Item = Variable> {
        self.iter().map(|literal| literal.variable())
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.iter().any(|literal| {
            valuation.value_of(literal.variable()) == Some(Some(literal.polarity()))
        })
    }

    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool {
        self.iter().all(|literal| {
            valuation.value_of(literal.variable()) == Some(Some(!literal.polarity()))
        })
    }
}

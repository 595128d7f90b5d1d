//! Literals are variables paired with a (boolean) polarity.
//!
//! A positive literal asserts its variable is true, a negative literal asserts its variable is false.
//! In DIMACS form a literal is a nonzero integer whose sign carries the polarity.
//!
//! An example:
//!
//! ```rust
//! # use stoat_sat::structures::literal::Literal;
//! let literal = Literal::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.variable(), 79);
//! assert_eq!(literal.negate(), -literal);
//! assert_eq!(literal.as_int(), 79);
//! assert_eq!((-literal).as_int(), -79);
//! ```
//!
//! Literals are ordered by variable and then polarity, with false (strictly) less than true.

use crate::structures::variable::{Variable, VARIABLE_MAX};

/// A variable paired with a polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// The variable of the literal.
    variable: Variable,

    /// The polarity of the literal.
    polarity: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing a variable with a polarity.
    pub fn new(variable: Variable, polarity: bool) -> Self {
        Literal { variable, polarity }
    }

    /// The variable of the literal.
    pub fn variable(&self) -> Variable {
        self.variable
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Literal {
            variable: self.variable,
            polarity: !self.polarity,
        }
    }

    /// The literal in integer form, with sign indicating polarity.
    pub fn as_int(&self) -> isize {
        match self.polarity {
            true => self.variable as isize,
            false => -(self.variable as isize),
        }
    }

    /// A literal from its integer form, if some literal has that form.
    ///
    /// Zero (the DIMACS clause terminator) and integers whose magnitude exceeds [VARIABLE_MAX] have no literal form.
    pub fn from_int(int: isize) -> Option<Self> {
        let magnitude = int.unsigned_abs();
        if int == 0 || magnitude > VARIABLE_MAX as usize {
            return None;
        }
        Some(Literal {
            variable: magnitude as Variable,
            polarity: int > 0,
        })
    }
}

impl std::ops::Neg for Literal {
    type Output = Literal;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_int())
    }
}

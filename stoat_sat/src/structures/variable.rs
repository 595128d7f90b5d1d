/*!
(The representation of) a variable.

Broadly, variables are things to which assigning a (boolean) value (true or false) is of interest.

Each variable is a u32 *v* with 1 ≤ *v* ≤ the variable count of the formula it belongs to.
Zero is never a variable --- in the DIMACS representation of a literal the sign of an integer carries the polarity, and so a variable must have a distinct negation.

As the variables of a formula are a contiguous range of positive integers starting from 1, structures indexed by variables store the entry for variable *v* at index *v* - 1.

# Notes
- In the logic literature these are often called 'atoms'.
*/

/// A variable, identified by a 1-based index.
pub type Variable = u32;

/// The maximum instance of a variable, limited by the integer representation of literals.
pub const VARIABLE_MAX: Variable = i32::MAX.unsigned_abs();

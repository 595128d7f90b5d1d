/*!
A (partial) function from variables to truth values.

If all variables are assigned a value the valuation is 'full', otherwise the valuation is 'partial'.

The canonical representation of a valuation is a vector of optional booleans, where the value of variable *v* is stored at index *v* - 1.
In other words, the canonical representation of a valuation 𝐯 is a vector *v* whose length is the number of variables in the context such that:
-  *v*\[x - 1\] = Some(true) *if and only if* 𝐯(𝐱) = true.
-  *v*\[x - 1\] = Some(false) *if and only if* 𝐯(𝐱) = false.
-  *v*\[x - 1\] = None *if and only if* 𝐯(𝐱) is undefined.

The trait is implemented for anything which can be dereferenced to a slice of optional booleans.

```rust
# use stoat_sat::structures::valuation::Valuation;
let valuation = vec![Some(true), None, Some(false), None];

assert_eq!(valuation.value_of(1), Some(Some(true)));
assert_eq!(valuation.value_of(2), Some(None));
assert_eq!(valuation.value_of(7), None);
assert_eq!(valuation.unvalued_variables().collect::<Vec<_>>(), vec![2, 4]);
```

# Soundness

As the value of a variable is read by using the variable as an (offset) index on the dereferenced structure, there is no structural guarantee that a returned value is for the variable of interest --- the guarantee holds only when the slice really is indexed by variables, as the slices held by a context are.
*/

use crate::structures::variable::Variable;

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// A valuation is something which stores some value of a variable and/or perhaps the information that the variable has no value.
pub trait Valuation {
    /// Some value of a variable under the valuation, or otherwise nothing.
    ///
    /// The outer option distinguishes a variable outside the valuation from a variable without a value.
    fn value_of(&self, variable: Variable) -> Option<Option<bool>>;

    /// An iterator over the values of variables in the valuation, in strict, contiguous, variable order.
    /// I.e. the first element is for the variable '1' and the *n*th element is for variable *n*.
    fn values(&self) -> impl Iterator<Item = Option<bool>>;

    /// An iterator through all (Variable, Value) pairs.
    fn variable_value_pairs(&self) -> impl Iterator<Item = (Variable, Option<bool>)>;

    /// An iterator through variables which have some value.
    fn valued_variables(&self) -> impl Iterator<Item = Variable>;

    /// An iterator through variables which do not have some value.
    fn unvalued_variables(&self) -> impl Iterator<Item = Variable>;

    /// A count of all the variables in the valuation.
    fn variable_count(&self) -> usize;
}

impl<V: std::ops::Deref<Target = [Option<bool>]>> Valuation for V {
    fn value_of(&self, variable: Variable) -> Option<Option<bool>> {
        match variable {
            0 => None,
            _ => self.get((variable - 1) as usize).copied(),
        }
    }

    fn values(&self) -> impl Iterator<Item = Option<bool>> {
        self.iter().copied()
    }

    fn variable_value_pairs(&self) -> impl Iterator<Item = (Variable, Option<bool>)> {
        self.iter()
            .enumerate()
            .map(|(index, value)| ((index + 1) as Variable, *value))
    }

    fn valued_variables(&self) -> impl Iterator<Item = Variable> {
        self.iter().enumerate().filter_map(|(index, value)| {
            value.as_ref().map(|_| (index + 1) as Variable)
        })
    }

    fn unvalued_variables(&self) -> impl Iterator<Item = Variable> {
        self.iter().enumerate().filter_map(|(index, value)| match value {
            None => Some((index + 1) as Variable),
            Some(_) => None,
        })
    }

    fn variable_count(&self) -> usize {
        self.len()
    }
}

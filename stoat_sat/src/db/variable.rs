//! The variable database --- the current (partial) valuation.
//!
//! The valuation is stored canonically (a [CValuation]) and mutated only through [assign](VariableDB::assign) and [retract](VariableDB::retract), each of which checks its precondition before touching the store.
//! Reads go through the [Valuation] trait.

use crate::{
    misc::log::targets::{self},
    structures::{
        valuation::{CValuation, Valuation},
        variable::Variable,
    },
    types::err::ContractError,
};

/// The variable database.
pub struct VariableDB {
    /// The current (partial) valuation.
    valuation: CValuation,
}

impl VariableDB {
    /// A new [VariableDB] with every variable of `1..=variable_count` unvalued.
    pub(crate) fn new(variable_count: Variable) -> Self {
        VariableDB {
            valuation: vec![None; variable_count as usize],
        }
    }

    /// A count of variables in the database.
    pub fn count(&self) -> usize {
        self.valuation.len()
    }

    /// The current valuation, as some structure which implements the valuation trait.
    pub fn valuation(&self) -> &impl Valuation {
        &self.valuation
    }

    /// Some value of a variable under the current valuation, or otherwise nothing.
    pub fn value_of(&self, variable: Variable) -> Option<Option<bool>> {
        self.valuation.value_of(variable)
    }

    /// The smallest variable without a value, if one exists.
    pub fn first_unvalued(&self) -> Option<Variable> {
        self.valuation.unvalued_variables().next()
    }

    /// Gives `variable` the value `value`.
    ///
    /// The variable must be part of the valuation and must not already have a value --- violations are [ContractError]s, returned before any mutation.
    pub(crate) fn assign(&mut self, variable: Variable, value: bool) -> Result<(), ContractError> {
        match self.value_of(variable) {
            None => Err(ContractError::VariableOutOfRange(variable)),
            Some(Some(_)) => Err(ContractError::Reassignment(variable)),
            Some(None) => {
                log::trace!(target: targets::VALUATION, "{variable} valued {value}");
                self.valuation[(variable - 1) as usize] = Some(value);
                Ok(())
            }
        }
    }

    /// Clears the value of `variable`.
    ///
    /// The variable must be part of the valuation and must have a value --- violations are [ContractError]s, returned before any mutation.
    pub(crate) fn retract(&mut self, variable: Variable) -> Result<(), ContractError> {
        match self.value_of(variable) {
            None => Err(ContractError::VariableOutOfRange(variable)),
            Some(None) => Err(ContractError::UnassignedRetraction(variable)),
            Some(Some(_)) => {
                log::trace!(target: targets::VALUATION, "{variable} cleared");
                self.valuation[(variable - 1) as usize] = None;
                Ok(())
            }
        }
    }

    /// The valued variables of the valuation as a DIMACS-style witness string, e.g. `"1 -2 3"`.
    pub fn valuation_string(&self) -> String {
        self.valuation
            .variable_value_pairs()
            .filter_map(|(variable, value)| match value {
                None => None,
                Some(true) => Some(format!("{variable}")),
                Some(false) => Some(format!("-{variable}")),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

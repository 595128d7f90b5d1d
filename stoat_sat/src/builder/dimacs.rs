//! A parser for DIMACS-style descriptions of a formula.
//!
//! The accepted form is the usual one:
//! - Leading lines starting `c` are comments.
//! - A problem line `p cnf <variables> <clauses>` precedes the clause data.
//! - Clauses are whitespace-separated nonzero integers, with `0` terminating each clause.
//! - A line starting `%` ends the formula (a convention of the SATLIB benchmark files).
//!
//! Declared counts are trusted no further than validation: the parsed clauses are routed through [from_parts](crate::context::Context::from_parts), so a mismatch between the problem line and the data is a build error rather than a quiet truncation.

use std::io::BufRead;

use crate::{
    config::Config,
    context::Context,
    misc::log::targets::{self},
    structures::{clause::CClause, literal::Literal, variable::Variable},
    types::err::{self, ParseError},
};

impl Context {
    /// A context from a DIMACS-style description of a formula.
    ///
    /// ```rust
    /// # use stoat_sat::config::Config;
    /// # use stoat_sat::context::Context;
    /// # use stoat_sat::reports::Report;
    /// # use std::io::Write;
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// c A pair of binary clauses.
    /// p cnf 2 2
    ///  1  2 0
    /// -1 -2 0
    /// ");
    ///
    /// let mut the_context = Context::from_dimacs(dimacs.as_slice(), Config::default()).unwrap();
    /// assert!(the_context.solve().is_ok());
    /// assert_eq!(the_context.report(), Report::Satisfiable);
    /// ```
    pub fn from_dimacs(
        mut reader: impl BufRead,
        config: Config,
    ) -> Result<Context, err::ErrorKind> {
        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;

        // First phase, read until the problem line.
        let (variable_count, clause_count) = 'preamble_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => return Err(err::ErrorKind::from(ParseError::ProblemSpecification)),
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ErrorKind::from(ParseError::Line(line_counter))),
            }

            match buffer.chars().next() {
                Some('c') | Some('\n') => continue 'preamble_loop,

                Some('p') => {
                    let mut problem_details = buffer.split_whitespace();

                    if problem_details.nth(1) != Some("cnf") {
                        return Err(err::ErrorKind::from(ParseError::ProblemSpecification));
                    }

                    let variable_count: Variable = match problem_details.next() {
                        None => return Err(err::ErrorKind::from(ParseError::ProblemSpecification)),
                        Some(string) => match string.parse() {
                            Err(_) => {
                                return Err(err::ErrorKind::from(ParseError::ProblemSpecification))
                            }
                            Ok(count) => count,
                        },
                    };

                    let clause_count: usize = match problem_details.next() {
                        None => return Err(err::ErrorKind::from(ParseError::ProblemSpecification)),
                        Some(string) => match string.parse() {
                            Err(_) => {
                                return Err(err::ErrorKind::from(ParseError::ProblemSpecification))
                            }
                            Ok(count) => count,
                        },
                    };

                    break 'preamble_loop (variable_count, clause_count);
                }

                _ => return Err(err::ErrorKind::from(ParseError::MisplacedProblem(line_counter))),
            }
        };

        // Second phase, read until the formula ends.
        // Capacity from the declared count, though the count is not trusted until from_parts.
        let mut clauses: Vec<CClause> = Vec::with_capacity(clause_count.min(u16::MAX as usize));
        let mut clause_buffer: CClause = Vec::default();

        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'formula_loop,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ErrorKind::from(ParseError::Line(line_counter))),
            }

            match buffer.chars().next() {
                Some('%') => break 'formula_loop,
                Some('c') => continue 'formula_loop,

                _ => {
                    for item in buffer.split_whitespace() {
                        match item {
                            "0" => {
                                let the_clause = std::mem::take(&mut clause_buffer);
                                clauses.push(the_clause);
                            }

                            _ => {
                                let parsed_int: isize = match item.parse() {
                                    Ok(int) => int,
                                    Err(_) => {
                                        return Err(err::ErrorKind::from(ParseError::Literal(
                                            line_counter,
                                        )))
                                    }
                                };

                                let the_literal = match Literal::from_int(parsed_int) {
                                    Some(literal) => literal,
                                    None => {
                                        return Err(err::ErrorKind::from(ParseError::Literal(
                                            line_counter,
                                        )))
                                    }
                                };

                                clause_buffer.push(the_literal);
                            }
                        }
                    }
                }
            }
        }

        log::info!(target: targets::PARSER, "Parsed {} clauses over {} variables", clauses.len(), variable_count);

        Context::from_parts(variable_count, clause_count, clauses, config)
    }
}

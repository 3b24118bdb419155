//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals, in the order read.
//! Literals are not deduplicated, as a clause is written back exactly as it was read.
//!
//! ```rust
//! # use pinpoint::structures::clause::{Clause, ClauseT};
//! let clause: Clause = vec![-1, 3, 2];
//! assert_eq!(clause.as_dimacs(true), "-1 3 2 0");
//! assert_eq!(clause.top_var(), 3);
//! ```

use crate::structures::literal::{variable, Literal};

/// A clause.
pub type Clause = Vec<Literal>;

/// The clause trait.
pub trait ClauseT {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// The greatest variable in the clause, or `0` if the clause is empty.
    fn top_var(&self) -> usize;
}

impl ClauseT for [Literal] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = self
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        if zero {
            if !the_string.is_empty() {
                the_string.push(' ');
            }
            the_string.push('0');
        }
        the_string
    }

    fn top_var(&self) -> usize {
        self.iter().map(|l| variable(*l)).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_clause() {
        let clause: Clause = vec![];
        assert_eq!(clause.as_dimacs(true), "0");
        assert_eq!(clause.as_dimacs(false), "");
        assert_eq!(clause.top_var(), 0);
    }
}

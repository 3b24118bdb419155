//! A formula in conjunctive normal form, as read from a clause source.

use crate::structures::clause::{Clause, ClauseT};

/// An ordered sequence of clauses, with the greatest variable found in any clause.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cnf {
    /// The clauses, in the order read.
    pub clauses: Vec<Clause>,

    /// The greatest variable of any clause.
    pub top_var: usize,
}

impl Cnf {
    /// Adds a clause, revising the top variable if needed.
    pub fn push(&mut self, clause: Clause) {
        self.top_var = std::cmp::max(self.top_var, clause.top_var());
        self.clauses.push(clause);
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }
}

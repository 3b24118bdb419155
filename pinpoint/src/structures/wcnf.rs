/*!
Weighted formulas in conjunctive normal form.

Each clause carries a weight.
Clauses with the hard weight of the formula must be satisfied, while any other (soft) clause may be relaxed at the cost of its weight.

The written form is the (pre-2022) WCNF format read by MaxSAT solvers:

```text
p wcnf <top var> <clause count> <hard weight>
<weight> <literal> ... 0
```

```rust
# use pinpoint::structures::wcnf::Wcnf;
let mut wcnf = Wcnf::new(3, 4);
wcnf.push_hard(vec![1, 2]);
wcnf.push_soft(vec![3], 1);
assert_eq!(wcnf.to_string(), "p wcnf 3 2 4\n4 1 2 0\n1 3 0\n");
```
*/

use crate::structures::clause::{Clause, ClauseT};

/// The weight of a clause.
pub type Weight = u64;

/// A clause together with its weight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightedClause {
    pub weight: Weight,
    pub clause: Clause,
}

/// A weighted formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wcnf {
    /// The top variable written to the header.
    pub top_var: usize,

    /// The weight of a hard clause.
    pub hard_weight: Weight,

    /// All clauses, hard and soft, in the order written.
    pub clauses: Vec<WeightedClause>,
}

impl Wcnf {
    pub fn new(top_var: usize, hard_weight: Weight) -> Self {
        Wcnf {
            top_var,
            hard_weight,
            clauses: Vec::default(),
        }
    }

    pub fn push_hard(&mut self, clause: Clause) {
        self.clauses.push(WeightedClause {
            weight: self.hard_weight,
            clause,
        });
    }

    pub fn push_soft(&mut self, clause: Clause, weight: Weight) {
        self.clauses.push(WeightedClause { weight, clause });
    }

    /// The count of all clauses, as written to the header.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// An iterator over the hard clauses, without their weights.
    pub fn hard_clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses
            .iter()
            .filter(|wc| wc.weight >= self.hard_weight)
            .map(|wc| &wc.clause)
    }

    /// An iterator over the soft clauses, with their weights.
    pub fn soft_clauses(&self) -> impl Iterator<Item = &WeightedClause> {
        self.clauses.iter().filter(|wc| wc.weight < self.hard_weight)
    }

    /// The sum of the weights of all soft clauses.
    pub fn soft_weight(&self) -> Weight {
        self.soft_clauses().map(|wc| wc.weight).sum()
    }
}

impl std::fmt::Display for Wcnf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "p wcnf {} {} {}",
            self.top_var,
            self.clause_count(),
            self.hard_weight
        )?;
        for wc in &self.clauses {
            writeln!(f, "{} {}", wc.weight, wc.clause.as_dimacs(true))?;
        }
        Ok(())
    }
}

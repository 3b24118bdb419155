/*!
Encoding a clause source, assumptions, and a query as a weighted formula.

In the encoding:
- Each clause of the source is hard.
- The negation of the query is a hard unit clause.
- Each assumption is a soft unit clause of weight 1.

So, a minimal set of soft clauses whose removal makes the formula satisfiable corresponds to a minimal set of assumptions (axioms) needed to derive the query.

The clauses are written in the order: source clauses, query, assumptions.

```rust
# use pinpoint::config::Config;
# use pinpoint::procedures::encode::encode;
let cnf = "1 2 0\n-1 3 0\n";
let assumptions = "2\n3\n";

let encoding = encode(cnf.as_bytes(), assumptions.as_bytes(), 1, &Config::default()).unwrap();
assert_eq!(
    encoding.wcnf.to_string(),
    "p wcnf 3 5 4\n4 1 2 0\n4 -1 3 0\n4 -1 0\n1 2 0\n1 3 0\n"
);
assert!(encoding.warnings.is_empty());
```
*/

use std::io::BufRead;

use crate::{
    builder::{assumptions::read_assumptions, dimacs::read_cnf},
    config::{Config, WeightPolicy},
    misc::log::targets::{self},
    reports::Warning,
    structures::{
        cnf::Cnf,
        literal::{negate, variable, Literal},
        wcnf::{Wcnf, Weight},
    },
    types::err::{self},
};

/// The weight of each soft clause.
pub const SOFT_WEIGHT: Weight = 1;

/// A weighted formula, with any warnings noted while encoding.
#[derive(Clone, Debug)]
pub struct Encoding {
    pub wcnf: Wcnf,
    pub warnings: Vec<Warning>,
}

/// Reads a clause source and assumptions, and encodes them with the query.
///
/// The query is checked before anything is read.
pub fn encode(
    cnf: impl BufRead,
    assumptions: impl BufRead,
    query: Literal,
    config: &Config,
) -> Result<Encoding, err::ErrorKind> {
    negate(query)?;
    let cnf = read_cnf(cnf)?;
    let assumptions = read_assumptions(assumptions, config.assumption_mode.value)?;
    encode_formula(&cnf, &assumptions, query, config)
}

/// Encodes a formula, assumptions, and query which have already been read.
pub fn encode_formula(
    cnf: &Cnf,
    assumptions: &[Literal],
    query: Literal,
    config: &Config,
) -> Result<Encoding, err::ErrorKind> {
    let negated_query = negate(query)?;
    if cnf.clause_count() == 0 {
        return Err(err::ErrorKind::from(err::ParseError::NoClauses));
    }

    let mut warnings = Vec::default();
    let top_var = cnf.top_var;

    if assumptions.is_empty() {
        warnings.push(Warning::EmptyAssumptions(config.assumption_mode.value));
    }

    if variable(query) > top_var {
        warnings.push(Warning::QueryBeyondTopVar { query, top_var });
    }

    for assumption in assumptions {
        if variable(*assumption) > top_var {
            warnings.push(Warning::AssumptionBeyondTopVar {
                assumption: *assumption,
                top_var,
            });
        }
    }

    let policy = config.weight_policy.value;
    let hard_weight = policy.hard_weight(top_var, assumptions.len());
    let soft_weight = assumptions.len() as Weight * SOFT_WEIGHT;

    if hard_weight > WeightPolicy::TopVar.hard_weight(top_var, 0) {
        warnings.push(Warning::WeightRaised {
            hard_weight,
            top_var,
        });
    }
    if soft_weight >= hard_weight {
        warnings.push(Warning::HardWeightDominated {
            hard_weight,
            soft_weight,
        });
    }

    for warning in &warnings {
        log::warn!(target: targets::ENCODE, "{warning}");
    }
    if config.strict.value {
        if let Some(warning) = warnings.first() {
            return Err(err::ErrorKind::from(err::ParseError::Strict(
                warning.to_string(),
            )));
        }
    }

    let mut wcnf = Wcnf::new(top_var, hard_weight);
    for clause in &cnf.clauses {
        wcnf.push_hard(clause.clone());
    }
    wcnf.push_hard(vec![negated_query]);
    for assumption in assumptions {
        wcnf.push_soft(vec![*assumption], SOFT_WEIGHT);
    }

    log::info!(target: targets::ENCODE, "Encoded {} hard and {} soft clauses with hard weight {hard_weight}", cnf.clause_count() + 1, assumptions.len());

    Ok(Encoding { wcnf, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AssumptionMode, structures::clause::Clause};

    fn cnf(clauses: Vec<Clause>) -> Cnf {
        let mut cnf = Cnf::default();
        for clause in clauses {
            cnf.push(clause);
        }
        cnf
    }

    #[test]
    fn negative_query() {
        let formula = cnf(vec![vec![1, -2]]);
        let encoding = encode_formula(&formula, &[1], -2, &Config::default()).unwrap();
        assert_eq!(encoding.wcnf.clauses[1].clause, vec![2]);
    }

    #[test]
    fn zero_query() {
        let formula = cnf(vec![vec![1, -2]]);
        assert_eq!(
            encode_formula(&formula, &[1], 0, &Config::default()).unwrap_err(),
            err::ErrorKind::Parse(err::ParseError::ZeroLiteral)
        );
    }

    #[test]
    fn duplicate_assumptions_kept() {
        let formula = cnf(vec![vec![1, 2]]);
        let encoding = encode_formula(&formula, &[2, 2], 1, &Config::default()).unwrap();
        assert_eq!(encoding.wcnf.soft_clauses().count(), 2);
        assert_eq!(encoding.wcnf.clause_count(), 4);
    }

    #[test]
    fn weight_raised() {
        let formula = cnf(vec![vec![1, 2]]);
        let encoding = encode_formula(&formula, &[1, 2, -1], 1, &Config::default()).unwrap();
        assert_eq!(encoding.wcnf.hard_weight, 4);
        assert!(encoding.wcnf.soft_weight() < encoding.wcnf.hard_weight);
        assert_eq!(
            encoding.warnings,
            vec![Warning::WeightRaised {
                hard_weight: 4,
                top_var: 2
            }]
        );
    }

    #[test]
    fn top_var_policy() {
        let formula = cnf(vec![vec![1, 2]]);
        let mut config = Config::default();
        assert!(config.weight_policy.set(WeightPolicy::TopVar).is_ok());

        let encoding = encode_formula(&formula, &[1, 2, -1], 1, &config).unwrap();
        assert_eq!(encoding.wcnf.hard_weight, 3);
        assert!(encoding.warnings.contains(&Warning::HardWeightDominated {
            hard_weight: 3,
            soft_weight: 3
        }));
    }

    #[test]
    fn empty_assumptions_warn() {
        let formula = cnf(vec![vec![1, 2]]);
        let mut config = Config::default();
        config.assumption_mode.value = AssumptionMode::Coi;

        let encoding = encode_formula(&formula, &[], 1, &config).unwrap();
        assert_eq!(
            encoding.warnings,
            vec![Warning::EmptyAssumptions(AssumptionMode::Coi)]
        );
        assert_eq!(encoding.wcnf.clause_count(), 2);

        config.strict.value = true;
        assert!(matches!(
            encode_formula(&formula, &[], 1, &config),
            Err(err::ErrorKind::Parse(err::ParseError::Strict(_)))
        ));
    }

    #[test]
    fn beyond_top_var() {
        let formula = cnf(vec![vec![1, 2]]);
        let encoding = encode_formula(&formula, &[5], -4, &Config::default()).unwrap();
        assert_eq!(
            encoding.warnings,
            vec![
                Warning::QueryBeyondTopVar {
                    query: -4,
                    top_var: 2
                },
                Warning::AssumptionBeyondTopVar {
                    assumption: 5,
                    top_var: 2
                },
            ]
        );
    }
}

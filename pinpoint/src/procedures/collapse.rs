/*!
Collapsing the definitions of an identifier into a single axiom.

Upstream, an equivalence is written as two directional inclusions which share an identifier.
Without metadata on which identifiers are equivalences, the kind of an axiom is inferred from its definitions.
The inference is isolated behind the [Collapse] trait, so a strategy using explicit metadata may replace it.

For each strategy:
- No definitions is a faulty reference.
- A single definition is a directional axiom.
- More than two definitions are ambiguous.

Strategies differ on a pair of definitions.
- [MatchCount] takes any pair to be an equivalence.
- [Converse] takes a pair to be an equivalence only if the second is the converse of the first.

In either case, the equivalence keeps the operands of the first definition.

```rust
# use pinpoint::builder::definitions::DefinitionIndex;
# use pinpoint::procedures::collapse::{Collapse, Converse, MatchCount};
# use pinpoint::structures::axiom::{Axiom, AxiomId};
let gci = "5 subClassOf A B\n5 subClassOf B A\n6 subClassOf C D\n6 subClassOf C E\n";
let index = DefinitionIndex::read(gci.as_bytes(), "".as_bytes()).unwrap();

let five = MatchCount.collapse(AxiomId(5), index.get(AxiomId(5))).unwrap();
assert!(matches!(five, Axiom::Equivalence(_)));
assert_eq!(five.serialize("equivalentTo"), "equivalentTo A B");

assert!(MatchCount.collapse(AxiomId(6), index.get(AxiomId(6))).is_ok());
assert!(Converse.collapse(AxiomId(6), index.get(AxiomId(6))).is_err());
```
*/

use crate::{
    config::CollapseStrategy,
    structures::axiom::{Axiom, AxiomId, Definition},
    types::err::{self},
};

/// Infers a single axiom from the definitions of an identifier.
pub trait Collapse {
    fn collapse(&self, id: AxiomId, definitions: &[Definition]) -> Result<Axiom, err::ExtractError>;
}

/// Any pair of definitions is an equivalence.
pub struct MatchCount;

/// A pair of definitions is an equivalence if the second is the converse of the first.
pub struct Converse;

impl Collapse for MatchCount {
    fn collapse(&self, id: AxiomId, definitions: &[Definition]) -> Result<Axiom, err::ExtractError> {
        match definitions {
            [] => Err(err::ExtractError::FaultyReference(id)),
            [definition] => Ok(Axiom::Directional(definition.clone())),
            [first, _] => Ok(Axiom::Equivalence(first.clone())),
            _ => Err(err::ExtractError::AmbiguousDefinition {
                id,
                count: definitions.len(),
            }),
        }
    }
}

impl Collapse for Converse {
    fn collapse(&self, id: AxiomId, definitions: &[Definition]) -> Result<Axiom, err::ExtractError> {
        match definitions {
            [first, second] => match is_converse(first, second) {
                true => Ok(Axiom::Equivalence(first.clone())),
                false => Err(err::ExtractError::AmbiguousDefinition { id, count: 2 }),
            },
            _ => MatchCount.collapse(id, definitions),
        }
    }
}

impl Collapse for CollapseStrategy {
    fn collapse(&self, id: AxiomId, definitions: &[Definition]) -> Result<Axiom, err::ExtractError> {
        match self {
            Self::Count => MatchCount.collapse(id, definitions),
            Self::Converse => Converse.collapse(id, definitions),
        }
    }
}

/// Whether the definitions share a relation and have the same terms in reverse order.
fn is_converse(first: &Definition, second: &Definition) -> bool {
    if first.relation != second.relation {
        return false;
    }
    let opened = first.relation.starts_with('(');
    match (terms(&first.operands, opened), terms(&second.operands, opened)) {
        (Some(mut a), Some(b)) => {
            a.reverse();
            a == b
        }
        _ => false,
    }
}

/// Splits operand tokens into the top-level terms of a definition.
///
/// If the relation opened a parenthesis, the final closing parenthesis is dropped.
/// Returns None if the parentheses are unbalanced.
fn terms(operands: &[String], opened: bool) -> Option<Vec<String>> {
    let mut joined = operands.join(" ");
    if opened {
        joined = joined.strip_suffix(')')?.to_string();
    }

    let mut terms = Vec::default();
    let mut term = String::default();
    let mut depth: usize = 0;

    for character in joined.chars() {
        match character {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1)?,
            c if c.is_whitespace() && depth == 0 => {
                if !term.is_empty() {
                    terms.push(std::mem::take(&mut term));
                }
                continue;
            }
            _ => {}
        }
        term.push(character);
    }

    if depth != 0 {
        return None;
    }
    if !term.is_empty() {
        terms.push(term);
    }
    Some(terms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::axiom::Origin;

    fn definition(relation: &str, operands: &str) -> Definition {
        Definition {
            id: AxiomId(1),
            relation: relation.to_string(),
            operands: operands.split_whitespace().map(|o| o.to_string()).collect(),
            origin: Origin::Gci,
            line: 1,
        }
    }

    #[test]
    fn nested_terms() {
        let operands = ["A", "(some", "r", "B))"].map(|o| o.to_string());
        assert_eq!(
            terms(&operands, true),
            Some(vec!["A".to_string(), "(some r B)".to_string()])
        );
    }

    #[test]
    fn unbalanced_terms() {
        let operands = ["A", "B))"].map(|o| o.to_string());
        assert_eq!(terms(&operands, true), None);
    }

    #[test]
    fn converse_krss() {
        let first = definition("(implies", "A (some r B))");
        let second = definition("(implies", "(some r B) A)");
        assert!(is_converse(&first, &second));

        let other = definition("(implies", "(some r C) A)");
        assert!(!is_converse(&first, &other));
    }

    #[test]
    fn converse_relation_differs() {
        let first = definition("subClassOf", "A B");
        let second = definition("subPropertyOf", "B A");
        assert!(!is_converse(&first, &second));
    }

    #[test]
    fn ambiguous() {
        let definitions = vec![definition("a", "b"); 3];
        assert_eq!(
            MatchCount.collapse(AxiomId(1), &definitions),
            Err(err::ExtractError::AmbiguousDefinition {
                id: AxiomId(1),
                count: 3
            })
        );
    }

    #[test]
    fn faulty_reference() {
        assert_eq!(
            Converse.collapse(AxiomId(9), &[]),
            Err(err::ExtractError::FaultyReference(AxiomId(9)))
        );
    }
}

/*!
Axioms, as defined by the general concept inclusion (GCI) and role inclusion (RI) encodings of a reasoner.

A definition line has the form `<id> <relation> <operand> ...`, where the relation and operands are tokens of a KRSS style surface syntax.
For example, `12 (implies A (some r B))`.

An axiom is either:
- Directional, written with the relation of its definition.
- An equivalence, represented upstream by two directional definitions sharing an identifier, and written once with the equivalence marker in place of the relation.

```rust
# use pinpoint::structures::axiom::{Axiom, AxiomId, Definition, Origin};
let definition = Definition {
    id: AxiomId(5),
    relation: "(implies".to_string(),
    operands: vec!["A".to_string(), "B)".to_string()],
    origin: Origin::Gci,
    line: 1,
};

let axiom = Axiom::Equivalence(definition);
assert_eq!(axiom.serialize("(equivalent"), "(equivalent A B)");
```
*/

/// The identifier of an axiom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AxiomId(pub u64);

impl std::fmt::Display for AxiomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifiers are matched as tokens upstream, so only the canonical decimal form is read.
/// A sign or a leading zero (as in `+7` or `07`) is rejected, rather than read as `7`.
impl std::str::FromStr for AxiomId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [] | [b'0', _, ..] => Err(()),
            digits if digits.iter().all(u8::is_ascii_digit) => s.parse::<u64>().map(AxiomId).map_err(|_| ()),
            _ => Err(()),
        }
    }
}

/// The source a definition was read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    /// General concept inclusions.
    Gci,

    /// Role inclusions.
    Ri,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gci => write!(f, "GCI"),
            Self::Ri => write!(f, "RI"),
        }
    }
}

/// A single definition line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Definition {
    pub id: AxiomId,

    /// The first token after the identifier.
    pub relation: String,

    /// All remaining tokens.
    pub operands: Vec<String>,

    pub origin: Origin,

    /// The line of the definition in its source, counted from 1.
    pub line: usize,
}

impl Definition {
    /// The tokens of the definition after the identifier, with the relation replaced if given.
    fn tokens_with<'a>(&'a self, relation: Option<&'a str>) -> impl Iterator<Item = &'a str> {
        std::iter::once(relation.unwrap_or(self.relation.as_str()))
            .chain(self.operands.iter().map(|o| o.as_str()))
    }
}

/// An axiom, built from one or two definitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Axiom {
    Directional(Definition),
    Equivalence(Definition),
}

impl Axiom {
    pub fn id(&self) -> AxiomId {
        match self {
            Self::Directional(d) | Self::Equivalence(d) => d.id,
        }
    }

    /// The axiom as a single line of the surface syntax, with tokens joined by single spaces.
    pub fn serialize(&self, equivalence_marker: &str) -> String {
        let tokens = match self {
            Self::Directional(d) => d.tokens_with(None).collect::<Vec<_>>(),
            Self::Equivalence(d) => d.tokens_with(Some(equivalence_marker)).collect::<Vec<_>>(),
        };
        tokens.join(" ")
    }
}

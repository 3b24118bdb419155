use std::{collections::HashMap, io::BufRead};

use crate::{
    builder::{read_lines, LineControl},
    misc::log::targets::{self},
    structures::axiom::{AxiomId, Definition, Origin},
    types::err::{self},
};

/// All definitions of the GCI and RI sources, keyed by axiom identifier.
///
/// Definitions of an identifier are kept in the order read, GCI definitions first.
#[derive(Clone, Debug, Default)]
pub struct DefinitionIndex {
    definitions: HashMap<AxiomId, Vec<Definition>>,
    count: usize,
}

impl DefinitionIndex {
    /// Reads the GCI source and then the RI source into a single index.
    ///
    /// ```rust
    /// # use pinpoint::builder::definitions::DefinitionIndex;
    /// # use pinpoint::structures::axiom::AxiomId;
    /// let gci = "1 (implies A B)\n2 (implies B A)\n2 (implies A B)\n";
    /// let ri = "3 (implies-role r s)\n";
    /// let index = DefinitionIndex::read(gci.as_bytes(), ri.as_bytes()).unwrap();
    /// assert_eq!(index.get(AxiomId(2)).len(), 2);
    /// assert_eq!(index.get(AxiomId(3))[0].relation, "(implies-role");
    /// assert!(index.get(AxiomId(4)).is_empty());
    /// ```
    pub fn read(gci: impl BufRead, ri: impl BufRead) -> Result<Self, err::ErrorKind> {
        let mut index = DefinitionIndex::default();
        index.read_source(gci, Origin::Gci)?;
        index.read_source(ri, Origin::Ri)?;

        log::info!(target: targets::PARSE, "Read {} definitions of {} axioms", index.count, index.definitions.len());
        Ok(index)
    }

    /// Reads further definitions from a source.
    pub fn read_source(&mut self, source: impl BufRead, origin: Origin) -> Result<(), err::ErrorKind> {
        read_lines(source, |line, line_number| {
            let mut tokens = line.split_whitespace();
            let Some(id) = tokens.next() else {
                return Ok(LineControl::Continue);
            };
            let id = id.parse::<AxiomId>().map_err(|_| err::ParseError::Token {
                line: line_number,
                token: id.to_string(),
            })?;

            let Some(relation) = tokens.next() else {
                return Err(err::ErrorKind::from(err::ParseError::IncompleteDefinition {
                    origin,
                    line: line_number,
                }));
            };

            self.insert(Definition {
                id,
                relation: relation.to_string(),
                operands: tokens.map(|t| t.to_string()).collect(),
                origin,
                line: line_number,
            });
            Ok(LineControl::Continue)
        })
    }

    pub fn insert(&mut self, definition: Definition) {
        self.count += 1;
        self.definitions
            .entry(definition.id)
            .or_default()
            .push(definition);
    }

    /// The definitions of an axiom, in the order read.
    pub fn get(&self, id: AxiomId) -> &[Definition] {
        self.definitions.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    /// The count of definitions, across all axioms.
    pub fn definition_count(&self) -> usize {
        self.count
    }
}

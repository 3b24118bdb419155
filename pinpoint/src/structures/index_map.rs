/*!
The index map of an extracted module.

Each axiom of a module is given a sequence index, counted from 1 in module order.
The map correlates the sequence index with the original identifier of the axiom and its serialized text, one entry per line:

```text
<sequence index> <original id> <serialized text>
```

The map is reversible, so results reported against the sequence indices of the fragment can be traced back to the original axioms, and the other way round.

```rust
# use pinpoint::structures::axiom::AxiomId;
# use pinpoint::structures::index_map::IndexMap;
let mut map = IndexMap::default();
map.push(AxiomId(40), "(implies A B)".to_string());
map.push(AxiomId(7), "(equivalent B C)".to_string());

assert_eq!(map.original_of(2), Ok(AxiomId(7)));
assert_eq!(map.sequence_of(AxiomId(40)), Ok(1));
assert_eq!(map.to_string(), "1 40 (implies A B)\n2 7 (equivalent B C)\n");
```
*/

use std::collections::HashMap;

use crate::{structures::axiom::AxiomId, types::err};

/// An entry of an index map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexEntry {
    pub sequence_index: usize,
    pub original_id: AxiomId,
    pub text: String,
}

/// The index map of a module.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexMap {
    entries: Vec<IndexEntry>,

    /// The position of the first entry of each original identifier.
    positions: HashMap<AxiomId, usize>,
}

impl IndexMap {
    /// Appends an entry with the next sequence index, which is returned.
    pub fn push(&mut self, original_id: AxiomId, text: String) -> usize {
        let sequence_index = self.entries.len() + 1;
        self.positions.entry(original_id).or_insert(self.entries.len());
        self.entries.push(IndexEntry {
            sequence_index,
            original_id,
            text,
        });
        sequence_index
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, sequence_index: usize) -> Result<&IndexEntry, err::IndexError> {
        match sequence_index {
            0 => None,
            _ => self.entries.get(sequence_index - 1),
        }
        .ok_or_else(|| err::IndexError::FaultyReference(sequence_index.to_string()))
    }

    /// The original identifier of the axiom at the given sequence index.
    pub fn original_of(&self, sequence_index: usize) -> Result<AxiomId, err::IndexError> {
        self.entry(sequence_index).map(|e| e.original_id)
    }

    /// The serialized text of the axiom at the given sequence index.
    pub fn text_of(&self, sequence_index: usize) -> Result<&str, err::IndexError> {
        self.entry(sequence_index).map(|e| e.text.as_str())
    }

    /// The sequence index of the (first) entry of the given original identifier.
    pub fn sequence_of(&self, original_id: AxiomId) -> Result<usize, err::IndexError> {
        match self.positions.get(&original_id) {
            Some(position) => Ok(self.entries[*position].sequence_index),
            None => Err(err::IndexError::FaultyReference(original_id.to_string())),
        }
    }
}

impl std::fmt::Display for IndexMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for entry in &self.entries {
            writeln!(
                f,
                "{} {} {}",
                entry.sequence_index, entry.original_id, entry.text
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_identifier() {
        let mut map = IndexMap::default();
        assert_eq!(map.push(AxiomId(3), "a".to_string()), 1);
        assert_eq!(map.push(AxiomId(3), "a".to_string()), 2);
        assert_eq!(map.sequence_of(AxiomId(3)), Ok(1));
        assert_eq!(map.original_of(2), Ok(AxiomId(3)));
    }

    #[test]
    fn out_of_range() {
        let mut map = IndexMap::default();
        map.push(AxiomId(3), "a".to_string());
        assert!(map.original_of(0).is_err());
        assert!(map.original_of(2).is_err());
        assert!(map.sequence_of(AxiomId(4)).is_err());
    }
}

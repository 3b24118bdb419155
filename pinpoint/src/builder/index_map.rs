use std::io::BufRead;

use crate::{
    builder::{read_lines, LineControl},
    misc::log::targets::{self},
    structures::{axiom::AxiomId, index_map::IndexMap},
    types::err::{self},
};

impl IndexMap {
    /// Reads an index map, as written by the extractor.
    ///
    /// The sequence indices must run from 1, in order and without gaps.
    /// The text of an entry is everything after the identifier, with surrounding whitespace removed.
    ///
    /// ```rust
    /// # use pinpoint::structures::axiom::AxiomId;
    /// # use pinpoint::structures::index_map::IndexMap;
    /// let map = IndexMap::read("1 40 (implies A B)\n2 7 (equivalent B  C)\n".as_bytes()).unwrap();
    /// assert_eq!(map.sequence_of(AxiomId(7)), Ok(2));
    /// assert_eq!(map.text_of(2), Ok("(equivalent B  C)"));
    /// ```
    pub fn read(reader: impl BufRead) -> Result<IndexMap, err::ErrorKind> {
        let mut map = IndexMap::default();

        read_lines(reader, |line, line_number| {
            let line = line.trim();
            if line.is_empty() {
                return Ok(LineControl::Continue);
            }

            let Some((sequence_index, rest)) = line.split_once(char::is_whitespace) else {
                return Err(err::ErrorKind::from(err::IndexError::Entry(line_number)));
            };
            let Some((original_id, text)) = rest.trim_start().split_once(char::is_whitespace)
            else {
                return Err(err::ErrorKind::from(err::IndexError::Entry(line_number)));
            };

            let sequence_index = sequence_index.parse::<usize>().map_err(|_| {
                err::ParseError::Token {
                    line: line_number,
                    token: sequence_index.to_string(),
                }
            })?;
            let original_id = original_id.parse::<AxiomId>().map_err(|_| {
                err::ParseError::Token {
                    line: line_number,
                    token: original_id.to_string(),
                }
            })?;

            if sequence_index != map.len() + 1 {
                return Err(err::ErrorKind::from(err::IndexError::Sequence {
                    line: line_number,
                    found: sequence_index,
                }));
            }

            map.push(original_id, text.trim_start().to_string());
            Ok(LineControl::Continue)
        })?;

        log::debug!(target: targets::INDEX, "Read {} index entries", map.len());
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap() {
        let map = IndexMap::read("1 4 a\n3 5 b\n".as_bytes());
        assert_eq!(
            map,
            Err(err::ErrorKind::Index(err::IndexError::Sequence {
                line: 2,
                found: 3
            }))
        );
    }

    #[test]
    fn missing_text() {
        let map = IndexMap::read("1 4\n".as_bytes());
        assert_eq!(map, Err(err::ErrorKind::Index(err::IndexError::Entry(1))));
    }

    #[test]
    fn round_trip() {
        let mut map = IndexMap::default();
        map.push(AxiomId(9), "(implies C D)".to_string());
        map.push(AxiomId(2), "(equivalent D E)".to_string());
        let text = map.to_string();
        assert_eq!(IndexMap::read(text.as_bytes()), Ok(map));
    }
}
